//! Order placement and lifecycle
//!
//! The one piece of this system with a real correctness contract: stock is
//! reserved per line with an atomic conditional decrement, and every failure
//! path restores what was already reserved before surfacing an error.

pub mod error;
pub mod models;
pub mod service;

pub use error::OrderError;
pub use models::{
    NewOrder, Order, OrderLine, OrderStatus, OrderSummary, PaymentMethod, PlaceOrderCommand,
};
pub use service::OrderService;
