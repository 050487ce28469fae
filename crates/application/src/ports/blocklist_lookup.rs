use async_trait::async_trait;
use dnsbl_tracker_domain::{DomainError, Verdict};

#[async_trait]
pub trait BlocklistLookup: Send + Sync {
    /// Check one address against the configured blocklist zones.
    ///
    /// May wait on network I/O. A `Verdict` with an empty code means the
    /// address is not listed.
    async fn check(&self, address: &str) -> Result<Verdict, DomainError>;
}
