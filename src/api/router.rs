use axum::{
    handler::HandlerWithoutStateExt,
    http::{HeaderValue, StatusCode},
    middleware,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::warn;

use super::auth;
use super::health;
use super::middleware::logging_middleware;
use super::movies;
use super::state::AppState;
use super::users;
use crate::config::{AppConfig, CorsConfig};

const WELCOME_PAGE: &str = "<h1>Music Movie API</h1>\
<a href=\"./documentation.html\">View documentation</a><br><br>\
<a href=\"./movies\">View the current top music movies (JSON, login required)</a>";

const NOTHING_HERE_PAGE: &str = "<p>Nothing here yet.</p><a href=\"./\">Go Back</a>";

/// Create the full router with application state
pub fn create_router(state: AppState, config: &AppConfig) -> Router {
    let static_files =
        ServeDir::new(&config.static_files.dir).not_found_service(nothing_here.into_service());

    Router::new()
        .route("/", get(welcome))
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Login (no bearer token required)
        .merge(auth::create_auth_router())
        .nest("/users", users::create_users_router())
        .nest("/movies", movies::create_movies_router())
        .fallback_service(static_files)
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}

async fn welcome() -> Html<&'static str> {
    Html(WELCOME_PAGE)
}

async fn nothing_here() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOTHING_HERE_PAGE))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}
