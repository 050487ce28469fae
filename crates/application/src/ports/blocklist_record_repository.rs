use async_trait::async_trait;
use dnsbl_tracker_domain::{BlocklistRecord, DomainError};

#[async_trait]
pub trait BlocklistRecordRepository: Send + Sync {
    /// Insert the record, or when the address already exists update only
    /// `response_code` and `updated_at`, keeping the stored `id` and
    /// `created_at`.
    async fn upsert(&self, record: &BlocklistRecord) -> Result<(), DomainError>;

    /// Point read by address. `None` means the address was never checked.
    async fn select(&self, address: &str) -> Result<Option<BlocklistRecord>, DomainError>;
}
