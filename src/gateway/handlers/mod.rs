//! HTTP handlers

pub mod admin;
pub mod appointments;
pub mod health;
pub mod orders;
pub mod products;
#[cfg(feature = "dev-seed")]
pub mod seed;

pub use admin::{admin_login, admin_logout};
pub use appointments::{book_appointment, list_appointments};
pub use health::health_check;
pub use orders::{get_order, list_orders, place_order, update_order_status};
pub use products::{
    create_product, delete_product, get_product, list_products, update_product,
};
#[cfg(feature = "dev-seed")]
pub use seed::seed_catalog;
