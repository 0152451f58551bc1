//! Authentication infrastructure module
//!
//! JWT issuance and validation plus the credential-checking auth service.

mod jwt;
mod service;

pub use jwt::{JwtGenerator, JwtService, SigningConfig, TokenClaims, DEFAULT_TOKEN_TTL_DAYS};
pub use service::AuthService;
