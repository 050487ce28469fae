use dnsbl_tracker_infrastructure::repositories::SqliteBlocklistRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub blocklist_record: Arc<SqliteBlocklistRecordRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            blocklist_record: Arc::new(SqliteBlocklistRecordRepository::new(pool)),
        }
    }
}
