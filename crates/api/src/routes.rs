use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/enqueue", post(handlers::enqueue))
        .route("/ips/{ip}", get(handlers::get_ip_details))
        .with_state(state)
}
