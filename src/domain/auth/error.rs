//! Authentication failures

use thiserror::Error;

use crate::domain::DomainError;

/// Why a login or a bearer token was rejected
///
/// `InvalidCredentials` deliberately covers both an unknown username and a
/// wrong password so callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Token signature could not be verified")]
    BadSignature,

    #[error("Token has expired")]
    Expired,

    #[error("Token subject no longer exists")]
    UnknownSubject,

    #[error("User store unavailable: {0}")]
    StoreUnavailable(String),
}

impl AuthFailure {
    /// Token validation failures that surface to clients as 401 Unauthorized
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::BadSignature | Self::Expired | Self::UnknownSubject
        )
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::BadSignature => "bad_signature",
            Self::Expired => "expired",
            Self::UnknownSubject => "unknown_subject",
            Self::StoreUnavailable(_) => "store_unavailable",
        }
    }
}

impl From<DomainError> for AuthFailure {
    fn from(err: DomainError) -> Self {
        Self::StoreUnavailable(err.to_string())
    }
}
