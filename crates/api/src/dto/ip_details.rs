use chrono::SecondsFormat;
use dnsbl_tracker_domain::BlocklistRecord;
use serde::Serialize;

/// Stored lookup result for one address. `checked` is false, with every
/// other field null, when the address has never been looked up.
#[derive(Serialize, Debug, Clone)]
pub struct IpDetailsResponse {
    pub id: Option<String>,
    pub ip_address: String,
    pub response_code: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub checked: bool,
}

impl IpDetailsResponse {
    pub fn from_record(record: BlocklistRecord) -> Self {
        Self {
            id: Some(record.id),
            ip_address: record.address,
            response_code: Some(record.response_code),
            created_at: Some(record.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            updated_at: Some(record.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
            checked: true,
        }
    }

    pub fn unchecked(ip_address: String) -> Self {
        Self {
            id: None,
            ip_address,
            response_code: None,
            created_at: None,
            updated_at: None,
            checked: false,
        }
    }
}
