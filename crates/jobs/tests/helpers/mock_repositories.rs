#![allow(dead_code)]

use async_trait::async_trait;
use dnsbl_tracker_application::ports::{BlocklistLookup, BlocklistRecordRepository};
use dnsbl_tracker_domain::{BlocklistRecord, DomainError, Verdict};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::{RwLock, Semaphore};

/// Lookup stand-in that records every call in order.
///
/// When gated, each call waits for a permit released by the test, which lets
/// a test hold the worker in the middle of a job.
pub struct MockBlocklistLookup {
    verdicts: RwLock<HashMap<String, Verdict>>,
    failures: RwLock<HashSet<String>>,
    panics: RwLock<HashSet<String>>,
    calls: Mutex<Vec<String>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockBlocklistLookup {
    pub fn new() -> Self {
        Self {
            verdicts: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashSet::new()),
            panics: RwLock::new(HashSet::new()),
            calls: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::new()
        }
    }

    pub fn release(&self, jobs: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(jobs);
        }
    }

    pub async fn set_listed(&self, address: &str, code: &str) {
        self.verdicts.write().await.insert(
            address.to_string(),
            Verdict::listed(code, "zen.spamhaus.org"),
        );
    }

    pub async fn set_failure(&self, address: &str) {
        self.failures.write().await.insert(address.to_string());
    }

    pub async fn set_panic(&self, address: &str) {
        self.panics.write().await.insert(address.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BlocklistLookup for MockBlocklistLookup {
    async fn check(&self, address: &str) -> Result<Verdict, DomainError> {
        self.calls.lock().unwrap().push(address.to_string());

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .expect("gate semaphore closed")
                .forget();
        }

        if self.panics.read().await.contains(address) {
            panic!("lookup exploded for {address}");
        }
        if self.failures.read().await.contains(address) {
            return Err(DomainError::LookupFailed(format!("SERVFAIL for {address}")));
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
    records: RwLock<HashMap<String, BlocklistRecord>>,
    should_fail: RwLock<bool>,
    upsert_count: Mutex<usize>,
}

impl MockBlocklistRecordRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            should_fail: RwLock::new(false),
            upsert_count: Mutex::new(0),
        }
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn get(&self, address: &str) -> Option<BlocklistRecord> {
        self.records.read().await.get(address).cloned()
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub fn upsert_count(&self) -> usize {
        *self.upsert_count.lock().unwrap()
    }
}

#[async_trait]
impl BlocklistRecordRepository for MockBlocklistRecordRepository {
    async fn upsert(&self, record: &BlocklistRecord) -> Result<(), DomainError> {
        *self.upsert_count.lock().unwrap() += 1;
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError("database is locked".to_string()));
        }
        self.records
            .write()
            .await
            .entry(record.address.clone())
            .and_modify(|existing| {
                existing.response_code = record.response_code.clone();
                existing.updated_at = record.updated_at;
            })
            .or_insert_with(|| record.clone());
        Ok(())
    }

    async fn select(&self, address: &str) -> Result<Option<BlocklistRecord>, DomainError> {
        Ok(self.get(address).await)
    }
}
