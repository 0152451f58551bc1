//! JWT token issuance and validation (HS256)

use chrono::{DateTime, Duration, NaiveDate, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::User;
use crate::domain::{AuthFailure, DomainError};

/// Default token lifetime in days
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 5;

/// JWT claims structure
///
/// Besides the registered claims, the token mirrors the public account fields.
/// The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username)
    pub sub: String,
    /// Issued at timestamp (Unix epoch)
    pub iat: i64,
    /// Expiration timestamp (Unix epoch)
    pub exp: i64,
    #[serde(rename = "_id", default)]
    pub user_id: String,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "FavoriteMovies", default)]
    pub favorite_movies: Vec<String>,
}

impl TokenClaims {
    /// Create claims for a user issued at `now`
    pub fn new(user: &User, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            sub: user.username().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            user_id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            birthday: user.birthday(),
            favorite_movies: user
                .favorite_movies()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }

    /// Tokens are valid strictly before `exp`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

/// Signing configuration: one shared secret for issuing and verifying
#[derive(Clone)]
pub struct SigningConfig {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl: Duration,
}

impl SigningConfig {
    /// HS256 configuration with a lifetime in days
    pub fn hs256(secret: impl Into<String>, ttl_days: i64) -> Self {
        Self {
            secret: secret.into(),
            algorithm: Algorithm::HS256,
            ttl: Duration::days(ttl_days),
        }
    }
}

impl Debug for SigningConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningConfig")
            .field("secret", &"[hidden]")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Sign a token for `user` issued at `now`
    fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, DomainError>;

    /// Verify signature and expiry relative to `now`
    fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthFailure>;

    /// Token lifetime
    fn ttl(&self) -> Duration;

    fn issue(&self, user: &User) -> Result<String, DomainError> {
        self.issue_at(user, Utc::now())
    }

    fn decode(&self, token: &str) -> Result<TokenClaims, AuthFailure> {
        self.decode_at(token, Utc::now())
    }
}

/// JWT service implementation using a symmetric secret
#[derive(Clone)]
pub struct JwtService {
    config: SigningConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("config", &self.config)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service, deriving both keys from the secret
    pub fn new(config: SigningConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(self.config.algorithm);
        // Expiry is checked against the caller's clock in decode_at
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation
    }
}

impl JwtGenerator for JwtService {
    fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<String, DomainError> {
        let claims = TokenClaims::new(user, now, self.config.ttl);

        encode(&Header::new(self.config.algorithm), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    fn decode_at(&self, token: &str, now: DateTime<Utc>) -> Result<TokenClaims, AuthFailure> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(|_| AuthFailure::BadSignature)?
            .claims;

        if claims.is_expired_at(now) {
            return Err(AuthFailure::Expired);
        }

        Ok(claims)
    }

    fn ttl(&self) -> Duration {
        self.config.ttl
    }
}
