use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid ID format: {message}")]
    InvalidId { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invalid_id(message: impl Into<String>) -> Self {
        Self::InvalidId {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Whether the error originates from the backing store rather than the request
    pub fn is_infrastructure(&self) -> bool {
        matches!(self, Self::Storage { .. } | Self::Internal { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("Movie 'Pulse' not found");
        assert_eq!(error.to_string(), "Not found: Movie 'Pulse' not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("Email is not valid");
        assert_eq!(error.to_string(), "Validation error: Email is not valid");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Username 'justincase' already exists");
        assert_eq!(
            error.to_string(),
            "Conflict: Username 'justincase' already exists"
        );
    }

    #[test]
    fn test_infrastructure_classification() {
        assert!(DomainError::storage("connection refused").is_infrastructure());
        assert!(DomainError::internal("join error").is_infrastructure());
        assert!(!DomainError::not_found("x").is_infrastructure());
        assert!(!DomainError::forbidden("x").is_infrastructure());
    }
}
