//! Movie Catalog API
//!
//! A REST backend for a movie catalog web application:
//! - Movies and user accounts stored as documents (in-memory or PostgreSQL)
//! - Username/password login issuing HS256 bearer tokens
//! - Bearer token checks on every protected route

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{Movie, MovieRepository, User};
use infrastructure::{
    auth::{AuthService, JwtService, SigningConfig},
    movie::{demo_movies, MovieService, StorageMovieRepository},
    storage::{PostgresConfig, StorageConfig, StorageFactory, StorageType},
    user::{PasswordScheme, StorageUserRepository, UserService},
};
use tracing::{info, warn};

/// Create the application state with all services initialized
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_config = storage_config(config)?;

    info!("Storage backend: {:?}", storage_config.storage_type());

    let factory = StorageFactory::connect(&storage_config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open storage: {}", e))?;

    let user_storage = factory.create::<User>("users").await?;
    let movie_storage = factory.create::<Movie>("movies").await?;

    let users = Arc::new(StorageUserRepository::new(user_storage));
    let movies = Arc::new(StorageMovieRepository::new(movie_storage));

    if config.storage.seed_demo_movies && factory.storage_type() == StorageType::InMemory {
        seed_movies(movies.as_ref()).await?;
    }

    let scheme = PasswordScheme::from_str(&config.auth.password_scheme).unwrap_or_else(|| {
        warn!(
            scheme = %config.auth.password_scheme,
            "Unknown password scheme, falling back to bcrypt"
        );
        PasswordScheme::Bcrypt
    });
    let hasher = scheme.hasher(config.auth.bcrypt_cost);

    let tokens = Arc::new(JwtService::new(SigningConfig::hs256(
        config.auth.jwt_secret.clone(),
        config.auth.token_ttl_days,
    )));

    let auth_service = Arc::new(AuthService::new(users.clone(), hasher.clone(), tokens));
    let user_service = Arc::new(UserService::new(users, movies.clone(), hasher));
    let movie_service = Arc::new(MovieService::new(movies));

    Ok(AppState::new(auth_service, user_service, movie_service))
}

fn storage_config(config: &AppConfig) -> anyhow::Result<StorageConfig> {
    let backend = StorageType::from_str(&config.storage.backend).ok_or_else(|| {
        anyhow::anyhow!("Unknown storage backend '{}'", config.storage.backend)
    })?;

    match backend {
        StorageType::InMemory => Ok(StorageConfig::in_memory()),
        StorageType::Postgres => {
            let url = config.storage.database_url().ok_or_else(|| {
                anyhow::anyhow!("DATABASE_URL is required for the postgres backend")
            })?;

            Ok(StorageConfig::postgres(
                PostgresConfig::new(url).with_max_connections(config.storage.max_connections),
            ))
        }
    }
}

async fn seed_movies(movies: &dyn MovieRepository) -> anyhow::Result<()> {
    let seeds = demo_movies();
    let count = seeds.len();

    for movie in seeds {
        movies.create(movie).await?;
    }

    info!(count, "Seeded demo movies");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_backend_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = "cassandra".to_string();

        assert!(storage_config(&config).is_err());
    }

    #[test]
    fn test_postgres_backend_uses_configured_url() {
        let mut config = AppConfig::default();
        config.storage.backend = "postgres".to_string();
        config.storage.database_url = Some("postgres://db.internal/catalog".to_string());

        let storage = storage_config(&config).unwrap();
        assert_eq!(storage.storage_type(), StorageType::Postgres);
    }

    #[tokio::test]
    async fn test_in_memory_state_is_seeded() {
        let state = create_app_state_with_config(&AppConfig::default()).await.unwrap();

        let movies = state.movie_service.list().await.unwrap();
        let titles: Vec<&str> = movies.iter().map(|m| m.title()).collect();
        let seeded = demo_movies();
        let expected: Vec<&str> = seeded.iter().map(|m| m.title()).collect();

        assert_eq!(titles, expected);
        assert_eq!(state.user_service.count().await.unwrap(), 0);
    }
}
