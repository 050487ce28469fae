use crate::DomainError;
use std::net::Ipv4Addr;

/// Parses a submitted address, accepting dotted-quad IPv4 only.
pub fn parse_ipv4(raw: &str) -> Result<Ipv4Addr, DomainError> {
    raw.trim()
        .parse::<Ipv4Addr>()
        .map_err(|_| DomainError::InvalidIpAddress(raw.to_string()))
}
