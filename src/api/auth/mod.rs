//! Login endpoint
//!
//! Exchanges username/password credentials for a signed bearer token.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap},
    routing::post,
    Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, UserResponse};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Username and password as sent by the client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginCredentials {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Login with username and password
///
/// POST /login
///
/// Credentials are read from a JSON body, an `Authorization: Basic` header or
/// the `Username`/`Password` query parameters, in that order. Every rejection
/// gets the same response.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<LoginCredentials>, QueryRejection>,
    body: Bytes,
) -> Result<Json<LoginResponse>, ApiError> {
    let credentials = credentials_from_body(&body)
        .or_else(|| credentials_from_basic(&headers))
        .or_else(|| query.ok().map(|Query(credentials)| credentials))
        .ok_or_else(|| {
            debug!("Login rejected: no usable credentials");
            ApiError::login_failed()
        })?;

    let user = state
        .auth_service
        .verify(&credentials.username, &credentials.password)
        .await?;

    let token = state.auth_service.issue(&user)?;

    info!(user_id = %user.id(), "User logged in");

    Ok(Json(LoginResponse {
        user: UserResponse::from(&user),
        token,
    }))
}

fn credentials_from_body(body: &[u8]) -> Option<LoginCredentials> {
    if body.is_empty() {
        return None;
    }

    serde_json::from_slice(body).ok()
}

/// Decode `Authorization: Basic base64(username:password)`
fn credentials_from_basic(headers: &HeaderMap) -> Option<LoginCredentials> {
    let encoded = headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Basic ")?
        .trim();

    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(LoginCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
