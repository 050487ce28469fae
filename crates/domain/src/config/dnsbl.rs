use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsblConfig {
    /// Zones queried in order; the first zone that lists an address wins.
    #[serde(default = "default_blocklist_domains")]
    pub blocklist_domains: Vec<String>,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,
}

impl Default for DnsblConfig {
    fn default() -> Self {
        Self {
            blocklist_domains: default_blocklist_domains(),
            query_timeout_ms: default_query_timeout_ms(),
        }
    }
}

fn default_blocklist_domains() -> Vec<String> {
    vec!["zen.spamhaus.org".to_string()]
}

fn default_query_timeout_ms() -> u64 {
    2000
}
