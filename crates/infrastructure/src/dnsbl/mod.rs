pub mod checker;
pub mod zone_query;

pub use checker::DnsblChecker;
pub use zone_query::{HickoryZoneQuery, ZoneQuery};
