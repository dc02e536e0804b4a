//! Catalog handlers (storefront browsing + admin CRUD)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::catalog::{Category, Product, ProductRepository};

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, CreateProductRequest, OkResponse, ProductListResponse,
    UpdateProductRequest, created, ok,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProductListQuery {
    /// Filter by category (optical | sun | lens)
    pub category: Option<String>,
    /// Include inactive products (back office); storefront default is false
    #[serde(default)]
    pub include_inactive: bool,
}

/// Product list
///
/// GET /api/v1/public/products
#[utoipa::path(
    get,
    path = "/api/v1/public/products",
    params(ProductListQuery),
    responses(
        (status = 200, description = "Product list", body = ProductListResponse),
        (status = 400, description = "Unknown category")
    ),
    tag = "Storefront"
)]
pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ProductListQuery>,
) -> ApiResult<ProductListResponse> {
    let category = match query.category.as_deref() {
        Some(c) => Some(
            Category::parse(c)
                .ok_or_else(|| ApiError::bad_request(format!("unknown category: {}", c)))?,
        ),
        None => None,
    };

    let products =
        ProductRepository::list(state.db.pool(), category, !query.include_inactive).await?;
    ok(ProductListResponse { ok: true, products })
}

/// Product detail
///
/// GET /api/v1/public/products/{id}
#[utoipa::path(
    get,
    path = "/api/v1/public/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product", body = Product),
        (status = 404, description = "Product not found")
    ),
    tag = "Storefront"
)]
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
) -> ApiResult<Product> {
    match ProductRepository::get_by_id(state.db.pool(), product_id).await? {
        Some(product) => ok(product),
        None => ApiError::not_found("Product not found").into_err(),
    }
}

/// Create product (admin)
///
/// POST /api/v1/admin/products
#[utoipa::path(
    post,
    path = "/api/v1/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid fields"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateProductRequest>,
) -> ApiResult<Product> {
    let new = req.into_new_product().map_err(ApiError::bad_request)?;

    let id = ProductRepository::create(state.db.pool(), &new).await?;
    let product = ProductRepository::get_by_id(state.db.pool(), id)
        .await?
        .ok_or_else(|| ApiError::internal("created product vanished"))?;

    tracing::info!(product_id = %id, name = %product.name, "Product created");
    created(product)
}

/// Whitelist update (admin). Absent fields stay untouched; the slug is
/// regenerated when the name changes.
///
/// PATCH /api/v1/admin/products/{id}
#[utoipa::path(
    patch,
    path = "/api/v1/admin/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = Product),
        (status = 400, description = "Invalid fields"),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
    Json(req): Json<UpdateProductRequest>,
) -> ApiResult<Product> {
    let patch = req.into_patch().map_err(ApiError::bad_request)?;
    if patch.is_empty() {
        return ApiError::bad_request("no updatable fields supplied").into_err();
    }

    match ProductRepository::update(state.db.pool(), product_id, &patch).await? {
        Some(product) => ok(product),
        None => ApiError::not_found("Product not found").into_err(),
    }
}

/// Delete product (admin)
///
/// DELETE /api/v1/admin/products/{id}
#[utoipa::path(
    delete,
    path = "/api/v1/admin/products/{id}",
    params(("id" = Uuid, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = OkResponse),
        (status = 404, description = "Product not found"),
        (status = 401, description = "Not authenticated")
    ),
    security(("admin_token" = [])),
    tag = "Back office"
)]
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(product_id): Path<Uuid>,
) -> ApiResult<OkResponse> {
    if ProductRepository::delete(state.db.pool(), product_id).await? {
        tracing::info!(product_id = %product_id, "Product deleted");
        ok(OkResponse::new())
    } else {
        ApiError::not_found("Product not found").into_err()
    }
}
