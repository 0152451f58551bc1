//! Credential verification and bearer token validation

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::{AuthFailure, DomainError};
use crate::infrastructure::user::{verify_blocking, PasswordHasher};

use super::jwt::JwtGenerator;

/// Authentication service: login and per-request token checks
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn JwtGenerator>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn JwtGenerator>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Check a username/password pair against the stored hash
    ///
    /// Unknown usernames and wrong passwords both yield `InvalidCredentials`.
    pub async fn verify(&self, username: &str, password: &str) -> Result<User, AuthFailure> {
        let Some(user) = self.users.get_by_username(username).await? else {
            debug!(username = %username, "Login rejected: unknown username");
            return Err(AuthFailure::InvalidCredentials);
        };

        if !verify_blocking(&self.hasher, password, user.password_hash()).await {
            debug!(username = %username, "Login rejected: incorrect password");
            return Err(AuthFailure::InvalidCredentials);
        }

        debug!(user_id = %user.id(), "Credentials verified");
        Ok(user)
    }

    /// Sign a bearer token for a verified user
    pub fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.tokens.issue(user)
    }

    /// Resolve a bearer token to the current account
    ///
    /// The account is looked up by the `_id` claim, so a token never follows
    /// a username to a different account after a rename.
    pub async fn validate(&self, token: &str) -> Result<User, AuthFailure> {
        self.validate_at(token, Utc::now()).await
    }

    pub async fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, AuthFailure> {
        let claims = self.tokens.decode_at(token, now)?;
        let id = UserId::new(claims.user_id).map_err(|_| AuthFailure::UnknownSubject)?;

        self.users.get(&id).await?.ok_or(AuthFailure::UnknownSubject)
    }
}
