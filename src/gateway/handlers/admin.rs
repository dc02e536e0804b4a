//! Back-office login/logout

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::state::AppState;
use super::super::types::{
    AdminLoginRequest, ApiError, ApiResult, LoginResponse, OkResponse, ok,
};

/// Admin login: password in, bearer token out
///
/// POST /api/v1/admin/login
#[utoipa::path(
    post,
    path = "/api/v1/admin/login",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing password"),
        (status = 401, description = "Wrong password")
    ),
    tag = "Back office"
)]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AdminLoginRequest>,
) -> ApiResult<LoginResponse> {
    if req.password.is_empty() {
        return ApiError::bad_request("password is required").into_err();
    }

    match state.admin_auth.login(&req.password) {
        Ok(token) => ok(LoginResponse { ok: true, token }),
        Err(e) => {
            tracing::warn!("Admin login failed: {}", e);
            ApiError::unauthorized("Wrong password").into_err()
        }
    }
}

/// Admin logout. Tokens are stateless, so this only acknowledges; the
/// client discards its token.
///
/// POST /api/v1/admin/logout
#[utoipa::path(
    post,
    path = "/api/v1/admin/logout",
    responses((status = 200, description = "Logged out", body = OkResponse)),
    tag = "Back office"
)]
pub async fn admin_logout() -> ApiResult<OkResponse> {
    ok(OkResponse::new())
}
