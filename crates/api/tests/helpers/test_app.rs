#![allow(dead_code)]

use super::StubLookup;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use dnsbl_tracker_api::{create_api_routes, AppState};
use dnsbl_tracker_application::ports::BlocklistRecordRepository;
use dnsbl_tracker_application::use_cases::{
    CheckAddressUseCase, EnqueueAddressesUseCase, GetIpDetailsUseCase,
};
use dnsbl_tracker_infrastructure::database::run_migrations;
use dnsbl_tracker_infrastructure::repositories::SqliteBlocklistRecordRepository;
use dnsbl_tracker_jobs::LookupQueue;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<SqliteBlocklistRecordRepository>,
    pub queue: Arc<LookupQueue>,
    pub lookup: Arc<StubLookup>,
}

pub async fn create_test_app(queue_length: usize, lookup: StubLookup) -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    let lookup = Arc::new(lookup);
    let repo = Arc::new(SqliteBlocklistRecordRepository::new(pool));
    let processor = Arc::new(CheckAddressUseCase::new(lookup.clone(), repo.clone()));
    let queue = Arc::new(LookupQueue::new(queue_length, processor));

    let state = AppState {
        enqueue: Arc::new(EnqueueAddressesUseCase::new(queue.clone())),
        get_ip_details: Arc::new(GetIpDetailsUseCase::new(repo.clone())),
        queue: queue.clone(),
    };

    TestApp {
        router: create_api_routes(state),
        repo,
        queue,
        lookup,
    }
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

pub async fn get_json(router: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body) = send(router, request).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

/// Waits for the worker to store a record for `address`.
pub async fn wait_for_record(repo: &SqliteBlocklistRecordRepository, address: &str) -> bool {
    tokio::time::timeout(Duration::from_secs(2), async {
        while repo.select(address).await.unwrap().is_none() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .is_ok()
}
