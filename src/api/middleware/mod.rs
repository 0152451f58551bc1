//! API middleware components

pub mod logging;
pub mod user_auth;

pub use logging::{logging_middleware, redact_query};
pub use user_auth::{extract_jwt_token, RequireUser};
