//! Authentication domain types

mod error;

pub use error::AuthFailure;
