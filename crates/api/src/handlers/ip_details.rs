use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{debug, instrument};

use crate::{dto::IpDetailsResponse, errors::ApiError, state::AppState};

#[instrument(skip(state), name = "api_get_ip_details")]
pub async fn get_ip_details(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<IpDetailsResponse>, ApiError> {
    let response = match state.get_ip_details.execute(&ip).await? {
        Some(record) => IpDetailsResponse::from_record(record),
        None => {
            debug!(ip = %ip, "No stored lookup for address");
            IpDetailsResponse::unchecked(ip.trim().to_string())
        }
    };

    Ok(Json(response))
}
