use dnsbl_tracker_application::ports::BlocklistLookup;
use dnsbl_tracker_domain::Config;
use dnsbl_tracker_infrastructure::dnsbl::DnsblChecker;
use std::sync::Arc;
use tracing::info;

pub fn build_lookup(config: &Config) -> anyhow::Result<Arc<dyn BlocklistLookup>> {
    let checker = DnsblChecker::from_system(&config.dnsbl)?;

    info!(
        zones = ?checker.zones(),
        query_timeout_ms = config.dnsbl.query_timeout_ms,
        "DNSBL checker ready"
    );

    Ok(Arc::new(checker))
}
