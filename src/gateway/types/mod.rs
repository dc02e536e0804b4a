//! Gateway types module
//!
//! Boundary enforcement for the HTTP API:
//!
//! ## Input Types
//! - [`PlaceOrderRequest`]: checkout deserialization + validation
//! - [`CreateProductRequest`] / [`UpdateProductRequest`]: admin catalog DTOs
//! - [`BookAppointmentRequest`]: storefront booking
//!
//! ## Output Types
//! - [`ApiError`] / [`ApiResult`]: unified error surface (`{error, detail?}`)
//! - Success DTOs (`{ok: true, ...}`) matching the public wire format

pub mod request;
pub mod response;

pub use request::{
    AdminLoginRequest, BookAppointmentRequest, CreateProductRequest, OrderItemPayload,
    PlaceOrderRequest, UpdateOrderStatusRequest, UpdateProductRequest,
};
pub use response::{
    ApiError, ApiResult, BookAppointmentResponse, LoginResponse, OkResponse, OrderListResponse,
    PlaceOrderResponse, ProductListResponse, created, ok,
};
