//! Store seams for the order placement path
//!
//! Checkout consumes the inventory and order stores through these traits so
//! the reservation protocol does not care where stock lives. Production
//! wires the PostgreSQL implementations; tests and seed-less dev runs wire
//! the in-memory ones.
//!
//! The only shared mutable resource in this subsystem is a product's stock
//! count, and it is reachable during checkout exclusively through
//! [`InventoryStore::conditional_decrement`] and [`InventoryStore::increment`].

pub mod memory;
pub mod pg;

pub use memory::{MemoryInventoryStore, MemoryOrderStore};
pub use pg::{PgInventoryStore, PgOrderStore};

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::Product;
use crate::orders::models::{NewOrder, Order, OrderStatus, OrderSummary};

/// Outcome of a guarded status transition.
///
/// `previous` lets the caller act exactly once on the first entry into a
/// status (restock on cancel) even when transitions race.
#[derive(Debug)]
pub enum StatusTransition {
    /// The guard matched; `previous` is the status the order held when the
    /// update committed.
    Applied { previous: OrderStatus, order: Order },
    /// The order is in a terminal status different from the requested one.
    Rejected { current: OrderStatus },
    NotFound,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Product inventory store
///
/// `conditional_decrement` is the reservation primitive: a single atomic
/// compare-and-decrement, so two orders racing for the last unit cannot
/// both succeed.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Fetch a product (price/name snapshot source during checkout)
    async fn get(&self, product_id: Uuid) -> Result<Option<Product>, StoreError>;

    /// Atomically decrement stock by `quantity` iff current stock >= quantity.
    /// Returns false (no mutation) on insufficient stock.
    async fn conditional_decrement(
        &self,
        product_id: Uuid,
        quantity: u32,
    ) -> Result<bool, StoreError>;

    /// Unconditional increment. Used only as rollback compensation and for
    /// the configurable restock-on-cancel policy.
    async fn increment(&self, product_id: Uuid, quantity: u32) -> Result<(), StoreError>;
}

/// Append-only order store with status updates
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order, returning its id
    async fn create(&self, order: &NewOrder) -> Result<Uuid, StoreError>;

    /// Get a full order by id
    async fn get(&self, order_id: Uuid) -> Result<Option<Order>, StoreError>;

    /// List order summaries, newest first, optionally filtered by status
    async fn list(&self, status: Option<OrderStatus>) -> Result<Vec<OrderSummary>, StoreError>;

    /// Set an order's status, guarded in the store itself: the write only
    /// lands if the current status is non-terminal or already equal to the
    /// requested one. Check-then-act in the caller would leave a window
    /// between reading the status and writing it.
    async fn transition_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<StatusTransition, StoreError>;
}
