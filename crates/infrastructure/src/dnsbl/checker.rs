use super::zone_query::{HickoryZoneQuery, ZoneQuery};
use async_trait::async_trait;
use dnsbl_tracker_application::ports::BlocklistLookup;
use dnsbl_tracker_domain::config::DnsblConfig;
use dnsbl_tracker_domain::{DomainError, Verdict};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Checks addresses against DNSBL zones by resolving
/// `<reversed address>.<zone>` A records.
///
/// Zones are tried in configured order and the first one that lists the
/// address decides the verdict. Zones that fail at the transport level are
/// skipped; only when every zone fails is the lookup an error.
pub struct DnsblChecker {
    query: Arc<dyn ZoneQuery>,
    zones: Vec<String>,
    timeout: Duration,
}

impl DnsblChecker {
    pub fn new(query: Arc<dyn ZoneQuery>, cfg: &DnsblConfig) -> Self {
        Self {
            query,
            zones: cfg
                .blocklist_domains
                .iter()
                .map(|zone| zone.trim().trim_end_matches('.').to_string())
                .collect(),
            // Resolver timeout plus headroom for the connection setup.
            timeout: Duration::from_millis(cfg.query_timeout_ms.saturating_mul(2)),
        }
    }

    pub fn from_system(cfg: &DnsblConfig) -> Result<Self, DomainError> {
        let query = HickoryZoneQuery::from_system(cfg)?;
        Ok(Self::new(Arc::new(query), cfg))
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn ip_to_query_name(ip: &IpAddr, zone: &str) -> String {
        match ip {
            IpAddr::V4(ipv4) => {
                let octets = ipv4.octets();
                format!(
                    "{}.{}.{}.{}.{}",
                    octets[3], octets[2], octets[1], octets[0], zone
                )
            }
            IpAddr::V6(ipv6) => {
                let mut nibbles = Vec::with_capacity(32);
                for byte in ipv6.octets().iter().rev() {
                    nibbles.push(format!("{:x}", byte & 0x0f));
                    nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
                }
                format!("{}.{}", nibbles.join("."), zone)
            }
        }
    }

    async fn query_zone(&self, name: &str) -> Result<Option<String>, DomainError> {
        tokio::time::timeout(self.timeout, self.query.query_a(name))
            .await
            .map_err(|_| DomainError::LookupTimeout(name.to_string()))?
    }
}

#[async_trait]
impl BlocklistLookup for DnsblChecker {
    #[instrument(skip(self))]
    async fn check(&self, address: &str) -> Result<Verdict, DomainError> {
        let ip: IpAddr = address
            .parse()
            .map_err(|_| DomainError::InvalidIpAddress(address.to_string()))?;

        let mut answered = false;
        let mut last_error = None;

        for zone in &self.zones {
            let name = Self::ip_to_query_name(&ip, zone);
            match self.query_zone(&name).await {
                Ok(Some(code)) => {
                    debug!(zone = %zone, code = %code, "Address listed");
                    return Ok(Verdict::listed(code, zone.as_str()));
                }
                Ok(None) => answered = true,
                Err(e) => {
                    warn!(zone = %zone, error = %e, "DNSBL zone query failed");
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) if !answered => Err(e),
            _ => Ok(Verdict::not_listed()),
        }
    }
}
