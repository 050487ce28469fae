//! dnsbl-tracker domain layer
pub mod blocklist_record;
pub mod config;
pub mod errors;
pub mod ip_address;
pub mod verdict;

pub use blocklist_record::{BlocklistRecord, NOT_LISTED_CODE};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use ip_address::parse_ipv4;
pub use verdict::Verdict;
