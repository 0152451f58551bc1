//! Request and response types shared by the HTTP handlers

pub mod error;
pub mod json;
pub mod movie;
pub mod user;

pub use error::{ApiError, ApiErrorResponse, ApiErrorType, LOGIN_FAILED_MESSAGE};
pub use json::Json;
pub use movie::CreateMovieBody;
pub use user::{MessageResponse, RegisterUserBody, UpdateUserBody, UserResponse};
