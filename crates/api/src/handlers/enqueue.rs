use axum::{extract::State, http::StatusCode, Json};
use tracing::{debug, instrument};

use crate::{
    dto::{EnqueueRequest, EnqueueResponse},
    errors::ApiError,
    state::AppState,
};

#[instrument(skip_all, name = "api_enqueue")]
pub async fn enqueue(
    State(state): State<AppState>,
    Json(request): Json<EnqueueRequest>,
) -> Result<(StatusCode, Json<EnqueueResponse>), ApiError> {
    debug!(count = request.ips.len(), "Enqueue request received");
    let outcome = state.enqueue.execute(&request.ips)?;

    let status = if outcome.all_accepted() {
        StatusCode::ACCEPTED
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    debug!(
        accepted = outcome.accepted.len(),
        rejected = outcome.rejected.len(),
        "Enqueue request handled"
    );

    Ok((status, Json(EnqueueResponse::from(outcome))))
}
