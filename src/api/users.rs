//! Account endpoints
//!
//! Registration is open; everything else needs a bearer token, and changes
//! are limited to the caller's own account.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tracing::info;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, Json, MessageResponse, RegisterUserBody, UpdateUserBody, UserResponse,
};
use crate::domain::user::User;

/// Create the users router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", post(register_user).get(list_users))
        .route(
            "/{username}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route(
            "/{username}/movies/{movie_id}",
            post(add_favorite).delete(remove_favorite),
        )
}

fn ensure_own_account(current: &User, username: &str) -> Result<(), ApiError> {
    if current.username() == username {
        Ok(())
    } else {
        Err(ApiError::forbidden("You can only change your own account"))
    }
}

/// POST /users
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterUserBody>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.user_service.register(body.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.user_service.list().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// GET /users/{username}
pub async fn get_user(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .get(&username)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("{} was not found", username)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /users/{username}
pub async fn update_user(
    State(state): State<AppState>,
    RequireUser(current): RequireUser,
    Path(username): Path<String>,
    Json(body): Json<UpdateUserBody>,
) -> Result<Json<UserResponse>, ApiError> {
    ensure_own_account(&current, &username)?;

    let user = state.user_service.update(&username, body.into()).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{username}
pub async fn delete_user(
    State(state): State<AppState>,
    RequireUser(current): RequireUser,
    Path(username): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    ensure_own_account(&current, &username)?;

    if !state.user_service.delete(&username).await? {
        return Err(ApiError::not_found(format!("{} was not found", username)));
    }

    info!(user_id = %current.id(), "Account deleted");

    Ok(Json(MessageResponse::new(format!("{} was deleted.", username))))
}

/// POST /users/{username}/movies/{movie_id}
pub async fn add_favorite(
    State(state): State<AppState>,
    RequireUser(current): RequireUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<Json<UserResponse>, ApiError> {
    ensure_own_account(&current, &username)?;

    let user = state.user_service.add_favorite(&username, &movie_id).await?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /users/{username}/movies/{movie_id}
pub async fn remove_favorite(
    State(state): State<AppState>,
    RequireUser(current): RequireUser,
    Path((username, movie_id)): Path<(String, String)>,
) -> Result<Json<UserResponse>, ApiError> {
    ensure_own_account(&current, &username)?;

    let user = state
        .user_service
        .remove_favorite(&username, &movie_id)
        .await?;

    Ok(Json(UserResponse::from(&user)))
}
