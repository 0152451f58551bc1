//! Password hashing: bcrypt (default) and Argon2

use std::fmt::Debug;
use std::sync::Arc;

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2PasswordHasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::domain::DomainError;

/// Trait for password hashing operations
pub trait PasswordHasher: Send + Sync + Debug {
    /// Hash a password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Verify a password against a hash. Unrecognised hash formats never verify.
    fn verify(&self, password: &str, hash: &str) -> bool;
}

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// bcrypt hasher producing `$2b$` strings
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(DEFAULT_BCRYPT_COST)
    }
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

/// Argon2id hasher producing PHC strings
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

/// Hashes on the blocking thread pool
pub async fn hash_blocking(
    hasher: &Arc<dyn PasswordHasher>,
    password: &str,
) -> Result<String, DomainError> {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();

    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
}

/// Verifies on the blocking pool; a failed task counts as a mismatch
pub async fn verify_blocking(hasher: &Arc<dyn PasswordHasher>, password: &str, hash: &str) -> bool {
    let hasher = Arc::clone(hasher);
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .unwrap_or(false)
}

/// Configured password hashing scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordScheme {
    #[default]
    Bcrypt,
    Argon2,
}

impl PasswordScheme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bcrypt" => Some(Self::Bcrypt),
            "argon2" | "argon2id" => Some(Self::Argon2),
            _ => None,
        }
    }

    /// Scheme that produced a stored hash, judged by its prefix
    pub fn of_hash(hash: &str) -> Option<Self> {
        if ["$2a$", "$2b$", "$2x$", "$2y$"]
            .iter()
            .any(|prefix| hash.starts_with(prefix))
        {
            Some(Self::Bcrypt)
        } else if hash.starts_with("$argon2") {
            Some(Self::Argon2)
        } else {
            None
        }
    }

    /// Builds the hasher for this scheme
    ///
    /// New hashes use this scheme. Stored hashes of either scheme keep verifying,
    /// so switching schemes does not lock out existing accounts.
    pub fn hasher(self, bcrypt_cost: u32) -> Arc<dyn PasswordHasher> {
        Arc::new(SchemeHasher {
            preferred: self,
            bcrypt: BcryptHasher::new(bcrypt_cost),
            argon2: Argon2Hasher::new(),
        })
    }
}

/// Hashes with the preferred scheme, verifies with whichever scheme made the hash
#[derive(Debug, Clone)]
struct SchemeHasher {
    preferred: PasswordScheme,
    bcrypt: BcryptHasher,
    argon2: Argon2Hasher,
}

impl PasswordHasher for SchemeHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        match self.preferred {
            PasswordScheme::Bcrypt => self.bcrypt.hash(password),
            PasswordScheme::Argon2 => self.argon2.hash(password),
        }
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordScheme::of_hash(hash) {
            Some(PasswordScheme::Bcrypt) => self.bcrypt.verify(password, hash),
            Some(PasswordScheme::Argon2) => self.argon2.verify(password, hash),
            None => false,
        }
    }
}
