use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid IPV4 address: {0}")]
    InvalidIpAddress(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Blocklist lookup failed: {0}")]
    LookupFailed(String),

    #[error("Blocklist lookup timed out for {0}")]
    LookupTimeout(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
