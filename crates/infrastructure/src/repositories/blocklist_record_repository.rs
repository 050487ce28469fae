use super::blocklist_record_row_mapper::{
    format_timestamp, row_to_record, BlocklistRecordRow, RECORD_SELECT_BY_IP, RECORD_UPSERT,
};
use async_trait::async_trait;
use dnsbl_tracker_application::ports::BlocklistRecordRepository;
use dnsbl_tracker_domain::{BlocklistRecord, DomainError};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

pub struct SqliteBlocklistRecordRepository {
    pool: SqlitePool,
}

impl SqliteBlocklistRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlocklistRecordRepository for SqliteBlocklistRecordRepository {
    #[instrument(skip(self, record), fields(ip = %record.address))]
    async fn upsert(&self, record: &BlocklistRecord) -> Result<(), DomainError> {
        sqlx::query(RECORD_UPSERT)
            .bind(&record.id)
            .bind(&record.address)
            .bind(&record.response_code)
            .bind(format_timestamp(&record.created_at))
            .bind(format_timestamp(&record.updated_at))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to upsert blocklist record");
                DomainError::DatabaseError(format!(
                    "unexpected database insert error for ip address {}: {}",
                    record.address, e
                ))
            })?;

        debug!(response_code = %record.response_code, "Blocklist record upserted");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn select(&self, address: &str) -> Result<Option<BlocklistRecord>, DomainError> {
        let row = sqlx::query_as::<_, BlocklistRecordRow>(RECORD_SELECT_BY_IP)
            .bind(address)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to select blocklist record");
                DomainError::DatabaseError(format!(
                    "unexpected query failure for ip address {}: {}",
                    address, e
                ))
            })?;

        match row {
            Some(row) => row_to_record(row).map(Some),
            None => {
                debug!("No blocklist record found");
                Ok(None)
            }
        }
    }
}
