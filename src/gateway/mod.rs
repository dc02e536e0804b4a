pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::admin_auth::{AdminAuthService, admin_auth_middleware};
use crate::config::AppConfig;
use crate::db::Database;
use crate::orders::OrderService;
use crate::store::{PgInventoryStore, PgOrderStore};
use state::AppState;

/// Start the HTTP gateway
pub async fn run_server(config: &AppConfig, db: Arc<Database>) {
    // Wire the store seams explicitly; the placement service never sees the
    // pool directly
    let inventory = Arc::new(PgInventoryStore::new(db.pool().clone()));
    let orders = Arc::new(PgOrderStore::new(db.pool().clone()));
    let order_service = Arc::new(OrderService::new(
        inventory,
        orders,
        config.orders.restock_on_cancel,
    ));

    let admin_auth = Arc::new(AdminAuthService::new(&config.admin));

    let state = Arc::new(AppState::new(db, order_service, admin_auth));

    // ==========================================================================
    // Public Routes (storefront, no auth)
    // ==========================================================================
    let public_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{id}", get(handlers::get_product))
        .route("/orders", post(handlers::place_order))
        .route("/appointments", post(handlers::book_appointment));

    // ==========================================================================
    // Admin Routes (bearer token required)
    // ==========================================================================
    let admin_routes = Router::new()
        .route("/products", post(handlers::create_product))
        .route(
            "/products/{id}",
            axum::routing::patch(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route("/orders", get(handlers::list_orders))
        .route(
            "/orders/{id}",
            get(handlers::get_order).patch(handlers::update_order_status),
        )
        .route("/appointments", get(handlers::list_appointments))
        .route("/logout", post(handlers::admin_logout))
        .layer(from_fn_with_state(state.clone(), admin_auth_middleware))
        // Login sits outside the auth layer
        .route("/login", post(handlers::admin_login));

    // Build complete router
    let app = Router::new()
        .route("/api/v1/health", get(handlers::health_check))
        .nest("/api/v1/public", public_routes)
        .nest("/api/v1/admin", admin_routes);

    // [SECURITY] Dev seed route - only compiled when 'dev-seed' feature is enabled.
    // Production builds MUST be compiled with `--no-default-features` to exclude this.
    #[cfg(feature = "dev-seed")]
    let app = app.nest(
        "/internal/dev",
        Router::new().route("/seed", post(handlers::seed_catalog)),
    );

    let app = app
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, config.gateway.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                config.gateway.port, config.gateway.port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);
    println!("🛍  Storefront API: /api/v1/public/*");
    println!("🔒 Back office:    /api/v1/admin/* (auth required)");

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
