use axum::{extract::State, http::StatusCode};
use std::sync::Arc;

use super::super::state::AppState;
use super::super::types::{ApiResult, OkResponse, ok};

/// Health check endpoint
///
/// GET /api/v1/health
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service and database healthy"),
        (status = 503, description = "Database unreachable")
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<OkResponse> {
    match state.db.health_check().await {
        Ok(()) => ok(OkResponse::new()),
        Err(e) => super::super::types::ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            format!("database unreachable: {}", e),
        )
        .into_err(),
    }
}
