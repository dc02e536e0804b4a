//! optic_shop - E-commerce backend for an optical retailer
//!
//! A small storefront + back-office API over PostgreSQL.
//!
//! # Modules
//!
//! - [`catalog`] - Product catalog (browsing + admin CRUD)
//! - [`store`] - Inventory/order store seams (PostgreSQL + in-memory)
//! - [`orders`] - Order placement service and status lifecycle
//! - [`appointments`] - Eye-exam appointment booking
//! - [`admin_auth`] - Password login + JWT gating for the back office
//! - [`gateway`] - Axum HTTP gateway (routes, handlers, DTOs)

pub mod admin_auth;
pub mod appointments;
pub mod catalog;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod store;

// Convenient re-exports at crate root
pub use catalog::{Category, FrameColor, Product};
pub use db::Database;
pub use orders::{
    NewOrder, Order, OrderError, OrderLine, OrderService, OrderStatus, PaymentMethod,
    PlaceOrderCommand,
};
pub use store::{
    InventoryStore, MemoryInventoryStore, MemoryOrderStore, OrderStore, PgInventoryStore,
    PgOrderStore, StatusTransition, StoreError,
};
