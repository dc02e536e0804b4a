//! API response types and the unified error surface
//!
//! Success bodies carry `ok: true` plus the payload; failures serialize as
//! `{"error": "...", "detail": "..."}` with an HTTP status of 400
//! (validation / insufficient stock), 401, 404, or 5xx (store errors).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::appointments::Appointment;
use crate::catalog::Product;
use crate::orders::models::{Order, OrderSummary};
use crate::orders::OrderError;
use crate::store::StoreError;

// ============================================================================
// ApiError: Unified Error Response
// ============================================================================

/// Error response carried to the client.
///
/// `msg` is the user-facing message; `detail` is an internal diagnostic
/// included only for unexpected store failures.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub msg: String,
    pub detail: Option<String>,
}

#[derive(Serialize, ToSchema)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
            detail: None,
        }
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            msg: "Internal server error".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::SERVICE_UNAVAILABLE,
            msg: "Service temporarily unavailable".to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                detail = self.detail.as_deref().unwrap_or(""),
                "Request failed: {}",
                self.msg
            );
        }
        let body = ErrorBody {
            error: self.msg,
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::InvalidRequest(_) => ApiError::bad_request(e.to_string()),
            OrderError::InsufficientStock { .. } => ApiError::bad_request(e.to_string()),
            OrderError::InvalidStatus(_) => ApiError::bad_request(e.to_string()),
            OrderError::OrderNotFound => ApiError::not_found("Order not found"),
            OrderError::Store(store) => store.into(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::service_unavailable(e.to_string())
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::service_unavailable(format!("database error: {}", e))
    }
}

// ============================================================================
// Success helpers
// ============================================================================

/// 200 OK with payload
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(data)))
}

/// 201 Created with payload
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(data)))
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Checkout success
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub ok: bool,
    pub order_id: Uuid,
}

/// Booking success
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentResponse {
    pub ok: bool,
    pub appointment_id: Uuid,
}

/// Generic `{ok: true}` acknowledgement (logout, status update, delete)
#[derive(Debug, Serialize, ToSchema)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn new() -> Self {
        Self { ok: true }
    }
}

impl Default for OkResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Admin login success
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub ok: bool,
    pub token: String,
}

/// Storefront / back-office product list
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductListResponse {
    pub ok: bool,
    pub products: Vec<Product>,
}

/// Back-office order list
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub ok: bool,
    pub orders: Vec<OrderSummary>,
}

/// Single order wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub ok: bool,
    pub order: Order,
}

/// Appointment list wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct AppointmentListResponse {
    pub ok: bool,
    pub appointments: Vec<Appointment>,
}
