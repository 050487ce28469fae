use crate::ports::BlocklistRecordRepository;
use dnsbl_tracker_domain::{parse_ipv4, BlocklistRecord, DomainError};
use std::sync::Arc;

pub struct GetIpDetailsUseCase {
    records: Arc<dyn BlocklistRecordRepository>,
}

impl GetIpDetailsUseCase {
    pub fn new(records: Arc<dyn BlocklistRecordRepository>) -> Self {
        Self { records }
    }

    pub async fn execute(&self, address: &str) -> Result<Option<BlocklistRecord>, DomainError> {
        let ip = parse_ipv4(address)?;
        self.records.select(&ip.to_string()).await
    }
}
