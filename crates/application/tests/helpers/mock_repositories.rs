#![allow(dead_code)]

use async_trait::async_trait;
use dnsbl_tracker_application::ports::{
    BlocklistLookup, BlocklistRecordRepository, LookupQueuePort,
};
use dnsbl_tracker_domain::{BlocklistRecord, DomainError, Verdict};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

pub struct MockBlocklistLookup {
    verdicts: Arc<RwLock<HashMap<String, Verdict>>>,
    failures: Arc<RwLock<HashMap<String, DomainError>>>,
    call_count: Arc<AtomicU64>,
}

impl MockBlocklistLookup {
    pub fn new() -> Self {
        Self {
            verdicts: Arc::new(RwLock::new(HashMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub async fn set_listed(&self, address: &str, code: &str) {
        self.verdicts.write().await.insert(
            address.to_string(),
            Verdict::listed(code, "zen.spamhaus.org"),
        );
    }

    pub async fn set_failure(&self, address: &str, error: DomainError) {
        self.failures
            .write()
            .await
            .insert(address.to_string(), error);
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BlocklistLookup for MockBlocklistLookup {
    async fn check(&self, address: &str) -> Result<Verdict, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        if let Some(err) = self.failures.read().await.get(address) {
            return Err(err.clone());
        }
        Ok(self
            .verdicts
            .read()
            .await
            .get(address)
            .cloned()
            .unwrap_or_else(Verdict::not_listed))
    }
}

pub struct MockBlocklistRecordRepository {
    records: Arc<RwLock<HashMap<String, BlocklistRecord>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockBlocklistRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_records(records: Vec<BlocklistRecord>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.records.write().await;
            for record in records {
                map.insert(record.address.clone(), record);
            }
        }
        repo
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl BlocklistRecordRepository for MockBlocklistRecordRepository {
    async fn upsert(&self, record: &BlocklistRecord) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        let mut records = self.records.write().await;
        records
            .entry(record.address.clone())
            .and_modify(|existing| {
                existing.response_code = record.response_code.clone();
                existing.updated_at = record.updated_at;
            })
            .or_insert_with(|| record.clone());
        Ok(())
    }

    async fn select(&self, address: &str) -> Result<Option<BlocklistRecord>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("disk I/O error".to_string()));
        }
        Ok(self.records.read().await.get(address).cloned())
    }
}

/// Queue stand-in that admits up to `capacity` addresses and never drains.
pub struct MockLookupQueue {
    capacity: usize,
    submitted: Mutex<Vec<String>>,
}

impl MockLookupQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }
}

impl LookupQueuePort for MockLookupQueue {
    fn submit(&self, address: &str) -> bool {
        let mut submitted = self.submitted.lock().unwrap();
        if submitted.len() >= self.capacity {
            return false;
        }
        submitted.push(address.to_string());
        true
    }

    fn is_running(&self) -> bool {
        true
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn pending(&self) -> usize {
        self.submitted.lock().unwrap().len()
    }
}
