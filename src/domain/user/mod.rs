//! User domain
//!
//! Domain types and traits for user accounts: the entity, its validation
//! rules, and the repository trait the authentication core reads from.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{
    validate_email, validate_password, validate_user_id, validate_username, UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
