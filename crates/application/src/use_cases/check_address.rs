use crate::ports::{BlocklistLookup, BlocklistRecordRepository};
use dnsbl_tracker_domain::{BlocklistRecord, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Use case: look one address up, store the verdict and return the stored record.
///
/// Runs on the lookup queue worker. Errors are returned to the caller, which
/// decides whether to log and move on.
pub struct CheckAddressUseCase {
    lookup: Arc<dyn BlocklistLookup>,
    records: Arc<dyn BlocklistRecordRepository>,
}

impl CheckAddressUseCase {
    pub fn new(
        lookup: Arc<dyn BlocklistLookup>,
        records: Arc<dyn BlocklistRecordRepository>,
    ) -> Self {
        Self { lookup, records }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, address: &str) -> Result<BlocklistRecord, DomainError> {
        let verdict = self.lookup.check(address).await?;

        debug!(
            listed = verdict.listed,
            code = %verdict.response_code(),
            zone = ?verdict.zone,
            "Blocklist verdict received"
        );

        let candidate = BlocklistRecord::from_verdict(address, &verdict);
        self.records.upsert(&candidate).await?;

        // The stored row keeps the id and created_at of its first write.
        self.records.select(address).await?.ok_or_else(|| {
            DomainError::DatabaseError(format!("record for {} missing after upsert", address))
        })
    }
}
