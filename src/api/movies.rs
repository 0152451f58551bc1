//! Movie catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Router,
};

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{ApiError, CreateMovieBody, Json, MessageResponse};
use crate::domain::movie::{Director, Genre, Movie};

/// Create the movies router
pub fn create_movies_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_movies).post(create_movie))
        .route("/{title}", get(get_movie))
        .route("/genres/{name}", get(get_genre))
        .route("/directors/{name}", get(get_director))
        .route("/id/{movie_id}", delete(delete_movie))
}

/// GET /movies
pub async fn list_movies(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
) -> Result<Json<Vec<Movie>>, ApiError> {
    Ok(Json(state.movie_service.list().await?))
}

/// GET /movies/{title}
pub async fn get_movie(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(title): Path<String>,
) -> Result<Json<Movie>, ApiError> {
    state
        .movie_service
        .get_by_title(&title)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("{} was not found", title)))
}

/// GET /movies/genres/{name}
pub async fn get_genre(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(name): Path<String>,
) -> Result<Json<Genre>, ApiError> {
    state
        .movie_service
        .genre(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Genre {} was not found", name)))
}

/// GET /movies/directors/{name}
pub async fn get_director(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(name): Path<String>,
) -> Result<Json<Director>, ApiError> {
    state
        .movie_service
        .director(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("Director {} was not found", name)))
}

/// POST /movies
pub async fn create_movie(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Json(body): Json<CreateMovieBody>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let movie = state.movie_service.create(body.into()).await?;

    Ok((StatusCode::CREATED, Json(movie)))
}

/// DELETE /movies/id/{movie_id}
pub async fn delete_movie(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(movie_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.movie_service.delete(&movie_id).await? {
        return Err(ApiError::not_found(format!("{} was not found", movie_id)));
    }

    Ok(Json(MessageResponse::new(format!("{} was deleted.", movie_id))))
}
