use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument, warn};

use crate::{dto::ReadyResponse, state::AppState};

pub async fn health_check() -> &'static str {
    debug!("Health check requested");
    "OK"
}

/// Ready while the lookup worker is alive.
#[instrument(skip(state), name = "api_readiness_check")]
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let running = state.queue.is_running();
    let response = ReadyResponse {
        status: if running { "ready" } else { "stopped" },
        queue_capacity: state.queue.capacity(),
        queue_pending: state.queue.pending(),
    };

    if running {
        (StatusCode::OK, Json(response))
    } else {
        warn!("Readiness check failed: lookup worker is not running");
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}
