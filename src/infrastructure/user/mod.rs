//! User infrastructure module
//!
//! Password hashing, the storage-backed user repository and the user service.

mod password;
mod repository;
mod service;

pub use password::{
    hash_blocking, verify_blocking, Argon2Hasher, BcryptHasher, PasswordHasher, PasswordScheme,
    DEFAULT_BCRYPT_COST,
};
pub use repository::StorageUserRepository;
pub use service::{RegisterUserRequest, UpdateUserRequest, UserService};
