//! Domain layer - Core entities, validation rules and repository traits

pub mod auth;
pub mod error;
pub mod movie;
pub mod storage;
pub mod user;

pub use auth::AuthFailure;
pub use error::DomainError;
pub use movie::{Director, Genre, Movie, MovieId, MovieRepository};
pub use user::{User, UserId, UserRepository};
