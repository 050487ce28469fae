use chrono::{DateTime, SecondsFormat, Utc};
use dnsbl_tracker_domain::{BlocklistRecord, DomainError};

pub(crate) type BlocklistRecordRow = (String, String, String, String, String);

pub(crate) const RECORD_SELECT_BY_IP: &str = "SELECT id, ip_address, response_code, created_at, updated_at
     FROM dns_blocklist WHERE ip_address = ?";

pub(crate) const RECORD_UPSERT: &str = "INSERT INTO dns_blocklist
         (id, ip_address, response_code, created_at, updated_at)
     VALUES (?, ?, ?, ?, ?)
     ON CONFLICT(ip_address) DO UPDATE SET
         response_code = excluded.response_code,
         updated_at = excluded.updated_at";

/// Microsecond precision keeps back-to-back writes ordered by `updated_at`.
pub(crate) fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| DomainError::DatabaseError(format!("Invalid timestamp '{}': {}", raw, e)))
}

pub(crate) fn row_to_record(row: BlocklistRecordRow) -> Result<BlocklistRecord, DomainError> {
    let (id, address, response_code, created_at, updated_at) = row;

    Ok(BlocklistRecord {
        id,
        address,
        response_code,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    })
}
