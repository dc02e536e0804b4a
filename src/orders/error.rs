use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum OrderError {
    /// Empty cart, malformed line, unknown/inactive product. Nothing is
    /// persisted and any partial reservation has been rolled back.
    #[error("invalid order request: {0}")]
    InvalidRequest(String),

    /// A product had less stock than requested. All prior reservations in
    /// this call have been rolled back.
    #[error("insufficient stock for product {product_id}")]
    InsufficientStock { product_id: Uuid },

    /// Admin-submitted status transition outside the allowed set
    #[error("invalid status transition: {0}")]
    InvalidStatus(String),

    #[error("order not found")]
    OrderNotFound,

    /// Underlying store failure; fatal for this request
    #[error(transparent)]
    Store(#[from] StoreError),
}
