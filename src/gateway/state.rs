use std::sync::Arc;

use crate::admin_auth::AdminAuthService;
use crate::db::Database;
use crate::orders::OrderService;

/// Shared gateway state
///
/// Constructed once at startup; every collaborator is injected explicitly,
/// there is no lazily-initialized global handle.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL pool (catalog + appointments repositories)
    pub db: Arc<Database>,
    /// Order placement + lifecycle service (store seams injected)
    pub order_service: Arc<OrderService>,
    /// Back-office auth
    pub admin_auth: Arc<AdminAuthService>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        order_service: Arc<OrderService>,
        admin_auth: Arc<AdminAuthService>,
    ) -> Self {
        Self {
            db,
            order_service,
            admin_auth,
        }
    }
}
