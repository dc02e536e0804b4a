//! Product catalog
//!
//! Storefront browsing plus back-office CRUD. Checkout never goes through
//! this module's stock writes; reservations use the [`crate::store`] seam.

pub mod models;
pub mod repository;

pub use models::{Category, FrameColor, NewProduct, Product, ProductPatch, slugify};
pub use repository::ProductRepository;
