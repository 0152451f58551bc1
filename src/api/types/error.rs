//! HTTP error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::{AuthFailure, DomainError};

/// Message returned for every rejected login
pub const LOGIN_FAILED_MESSAGE: &str = "Something is wrong";

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorType {
    InvalidRequestError,
    AuthenticationError,
    PermissionError,
    NotFoundError,
    ConflictError,
    ValidationError,
    ServerError,
}

impl std::fmt::Display for ApiErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestError => write!(f, "invalid_request_error"),
            Self::AuthenticationError => write!(f, "authentication_error"),
            Self::PermissionError => write!(f, "permission_error"),
            Self::NotFoundError => write!(f, "not_found_error"),
            Self::ConflictError => write!(f, "conflict_error"),
            Self::ValidationError => write!(f, "validation_error"),
            Self::ServerError => write!(f, "server_error"),
        }
    }
}

/// Error body: `{ "message", "type", "code"? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: ApiErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    pub fn new(status: StatusCode, error_type: ApiErrorType, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                message: message.into(),
                error_type,
                code: None,
            },
        }
    }

    /// Add error code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.response.code = Some(code.into());
        self
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorType::InvalidRequestError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, ApiErrorType::AuthenticationError, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, ApiErrorType::PermissionError, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, ApiErrorType::NotFoundError, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, ApiErrorType::ConflictError, message)
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            ApiErrorType::ValidationError,
            message,
        )
    }

    /// Internal server error; the message is sent to the client as-is
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, ApiErrorType::ServerError, message)
    }

    /// Rejected login, whatever the reason
    pub fn login_failed() -> Self {
        Self::bad_request(LOGIN_FAILED_MESSAGE).with_code("invalid_credentials")
    }

    /// Logs the detail and returns a generic 500
    fn masked(detail: &dyn std::fmt::Display) -> Self {
        error!(error = %detail, "Request failed");
        Self::internal(INTERNAL_MESSAGE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::unprocessable(message),
            DomainError::InvalidId { message } => Self::unprocessable(message).with_code("invalid_id"),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Forbidden { message } => Self::forbidden(message),
            DomainError::Internal { .. } | DomainError::Storage { .. } => Self::masked(&err),
        }
    }
}

/// Bearer token failures. Login rejections go through [`ApiError::login_failed`].
impl From<AuthFailure> for ApiError {
    fn from(failure: AuthFailure) -> Self {
        match failure {
            AuthFailure::StoreUnavailable(_) => Self::masked(&failure),
            AuthFailure::InvalidCredentials => Self::login_failed(),
            AuthFailure::BadSignature | AuthFailure::Expired | AuthFailure::UnknownSubject => {
                debug!(reason = failure.kind(), "Bearer token rejected");
                Self::unauthorized("Unauthorized")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.error_type, self.response.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        let cases = [
            (DomainError::not_found("Pulse was not found"), StatusCode::NOT_FOUND),
            (DomainError::validation("Email is not valid"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::invalid_id("bad id"), StatusCode::UNPROCESSABLE_ENTITY),
            (DomainError::conflict("justincase already exists"), StatusCode::CONFLICT),
            (DomainError::forbidden("not your account"), StatusCode::FORBIDDEN),
            (DomainError::storage("db down"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status, status);
        }
    }

    #[test]
    fn test_infrastructure_detail_is_not_exposed() {
        let err = ApiError::from(DomainError::storage("password=hunter2 host=db"));
        assert_eq!(err.response.message, "Internal server error");

        let err = ApiError::from(AuthFailure::StoreUnavailable("db timeout".into()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.response.message.contains("timeout"));
    }

    #[test]
    fn test_token_failures_share_one_response() {
        for failure in [
            AuthFailure::BadSignature,
            AuthFailure::Expired,
            AuthFailure::UnknownSubject,
        ] {
            let err = ApiError::from(failure);
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.response.message, "Unauthorized");
        }
    }

    #[test]
    fn test_login_failed_body() {
        let err = ApiError::login_failed();
        let json = serde_json::to_value(&err.response).unwrap();

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Something is wrong");
        assert_eq!(json["type"], "invalid_request_error");
    }
}
