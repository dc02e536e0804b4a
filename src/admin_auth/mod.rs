//! Back-office authentication
//!
//! Single shared admin credential: an Argon2 hash in config, exchanged at
//! login for a short-lived JWT presented as a bearer token on every admin
//! route.

pub mod middleware;
pub mod service;

pub use middleware::admin_auth_middleware;
pub use service::{AdminAuthService, Claims};
