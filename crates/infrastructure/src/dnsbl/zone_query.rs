use async_trait::async_trait;
use dnsbl_tracker_domain::config::DnsblConfig;
use dnsbl_tracker_domain::DomainError;
use hickory_resolver::TokioResolver;
use std::time::Duration;
use tracing::debug;

/// A-record lookup against one fully built DNSBL name.
#[async_trait]
pub trait ZoneQuery: Send + Sync {
    /// `Ok(None)` when the zone has no record for the name (not listed).
    async fn query_a(&self, name: &str) -> Result<Option<String>, DomainError>;
}

pub struct HickoryZoneQuery {
    resolver: TokioResolver,
}

impl HickoryZoneQuery {
    pub fn new(resolver: TokioResolver) -> Self {
        Self { resolver }
    }

    /// Resolver built from the system configuration with caching disabled, so
    /// every job sees the zone's current answer.
    pub fn from_system(cfg: &DnsblConfig) -> Result<Self, DomainError> {
        let mut builder = TokioResolver::builder_tokio()
            .map_err(|e| DomainError::ConfigError(format!("failed to create resolver: {e}")))?;
        let opts = builder.options_mut();
        opts.cache_size = 0;
        opts.attempts = 1;
        opts.timeout = Duration::from_millis(cfg.query_timeout_ms);

        Ok(Self::new(builder.build()))
    }
}

#[async_trait]
impl ZoneQuery for HickoryZoneQuery {
    async fn query_a(&self, name: &str) -> Result<Option<String>, DomainError> {
        match self.resolver.ipv4_lookup(name).await {
            Ok(lookup) => Ok(lookup.iter().next().map(|a| a.to_string())),
            Err(e) if e.is_no_records_found() => {
                debug!(name, "DNSBL zone returned no records");
                Ok(None)
            }
            Err(e) => Err(DomainError::LookupFailed(format!("{name}: {e}"))),
        }
    }
}
