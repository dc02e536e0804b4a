//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::catalog::Product;
use crate::gateway::types::response::{AppointmentListResponse, OrderResponse, ProductListResponse};
use crate::gateway::types::{
    AdminLoginRequest, BookAppointmentRequest, BookAppointmentResponse, CreateProductRequest,
    LoginResponse, OkResponse, OrderListResponse, PlaceOrderRequest, PlaceOrderResponse,
    UpdateOrderStatusRequest, UpdateProductRequest,
};

/// Bearer-token security scheme for the back office
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_token",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/v1/admin/login"))
                        .build(),
                ),
            );
        }
    }
}

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Optic Shop API",
        version = "1.0.0",
        description = "Storefront and back-office API for an optical retailer.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        // Storefront
        crate::gateway::handlers::products::list_products,
        crate::gateway::handlers::products::get_product,
        crate::gateway::handlers::orders::place_order,
        crate::gateway::handlers::appointments::book_appointment,
        // Back office
        crate::gateway::handlers::admin::admin_login,
        crate::gateway::handlers::admin::admin_logout,
        crate::gateway::handlers::products::create_product,
        crate::gateway::handlers::products::update_product,
        crate::gateway::handlers::products::delete_product,
        crate::gateway::handlers::orders::list_orders,
        crate::gateway::handlers::orders::get_order,
        crate::gateway::handlers::orders::update_order_status,
        crate::gateway::handlers::appointments::list_appointments,
    ),
    components(
        schemas(
            Product,
            PlaceOrderRequest,
            PlaceOrderResponse,
            CreateProductRequest,
            UpdateProductRequest,
            UpdateOrderStatusRequest,
            BookAppointmentRequest,
            BookAppointmentResponse,
            AdminLoginRequest,
            LoginResponse,
            ProductListResponse,
            OrderListResponse,
            OrderResponse,
            AppointmentListResponse,
            OkResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Storefront", description = "Public catalog, checkout and booking"),
        (name = "Back office", description = "Admin product/order management"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
