use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Response code stored for an address that was checked and is not listed.
pub const NOT_LISTED_CODE: &str = "NXDOMAIN";

/// Latest blocklist lookup result for one address.
///
/// `id` and `created_at` are fixed by the first write; later upserts for the
/// same address only move `response_code` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlocklistRecord {
    pub id: String,
    pub address: String,
    pub response_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlocklistRecord {
    /// Builds a candidate record for an upsert, stamped with the current time.
    pub fn new(address: impl Into<String>, response_code: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            address: address.into(),
            response_code: response_code.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds the record for a lookup verdict, mapping an empty code to the
    /// not-listed sentinel.
    pub fn from_verdict(address: impl Into<String>, verdict: &crate::Verdict) -> Self {
        Self::new(address, verdict.response_code())
    }

    pub fn is_listed(&self) -> bool {
        self.response_code != NOT_LISTED_CODE
    }
}
