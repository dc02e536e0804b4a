//! Order handlers (checkout + back office)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::orders::OrderStatus;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, OrderListResponse, PlaceOrderRequest, PlaceOrderResponse,
    UpdateOrderStatusRequest, created, ok,
};
use super::super::types::response::OrderResponse;

/// Checkout endpoint
///
/// POST /api/v1/public/orders
#[utoipa::path(
    post,
    path = "/api/v1/public/orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Invalid request or insufficient stock"),
        (status = 503, description = "Store unavailable")
    ),
    tag = "Storefront"
)]
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PlaceOrderRequest>,
) -> ApiResult<PlaceOrderResponse> {
    // 1. Validate at the boundary, producing a typed command
    let cmd = req.into_command().map_err(ApiError::bad_request)?;

    tracing::info!(items = cmd.items.len(), "Checkout: received cart");

    // 2. Reserve stock + persist (all rollback handling lives in the service)
    let order_id = state.order_service.place_order(cmd).await?;

    // 3. Return the new order id
    created(PlaceOrderResponse { ok: true, order_id })
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct OrderListQuery {
    /// Filter by status; unknown values are rejected
    pub status: Option<String>,
}

/// Back-office order list
///
/// GET /api/v1/admin/orders?status=pending
#[utoipa::path(
    get,
    path = "/api/v1/admin/orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Order list", body = OrderListResponse),
        (status = 400, description = "Unknown status filter"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderListQuery>,
) -> ApiResult<OrderListResponse> {
    let status = match query.status.as_deref() {
        Some(s) => Some(
            OrderStatus::parse(s)
                .ok_or_else(|| ApiError::bad_request(format!("unknown status: {}", s)))?,
        ),
        None => None,
    };

    let orders = state.order_service.list_orders(status).await?;
    ok(OrderListResponse { ok: true, orders })
}

/// Single order lookup
///
/// GET /api/v1/admin/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
) -> ApiResult<OrderResponse> {
    let order = state.order_service.get_order(order_id).await?;
    ok(OrderResponse { ok: true, order })
}

/// Admin status transition
///
/// PATCH /api/v1/admin/orders/{id}  body: {"status": "paid"}
#[utoipa::path(
    patch,
    path = "/api/v1/admin/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = OrderResponse),
        (status = 400, description = "Status not in the allowed set"),
        (status = 404, description = "Order not found"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<Uuid>,
    Json(req): Json<UpdateOrderStatusRequest>,
) -> ApiResult<OrderResponse> {
    // Membership in the enumerated set is the only string-level check;
    // lifecycle rules live in the service
    let status = OrderStatus::parse(&req.status).ok_or_else(|| {
        ApiError::bad_request(format!(
            "invalid status: {} (allowed: pending, paid, shipped, completed, cancelled)",
            req.status
        ))
    })?;

    let order = state.order_service.update_status(order_id, status).await?;

    tracing::info!(order_id = %order_id, status = status.as_str(), "Order status updated");
    ok(OrderResponse { ok: true, order })
}
