//! Application state for shared services

use std::sync::Arc;

use crate::domain::movie::{Director, Genre, Movie};
use crate::domain::user::User;
use crate::domain::{AuthFailure, DomainError};
use crate::infrastructure::auth::AuthService;
use crate::infrastructure::movie::{CreateMovieRequest, MovieService};
use crate::infrastructure::user::{RegisterUserRequest, UpdateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub movie_service: Arc<dyn MovieServiceTrait>,
}

/// Trait for login and bearer token checks
#[async_trait::async_trait]
pub trait AuthServiceTrait: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> Result<User, AuthFailure>;
    fn issue(&self, user: &User) -> Result<String, DomainError>;
    async fn validate(&self, token: &str) -> Result<User, AuthFailure>;
}

/// Trait for account operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError>;
    async fn get(&self, username: &str) -> Result<Option<User>, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
    async fn update(&self, username: &str, request: UpdateUserRequest)
        -> Result<User, DomainError>;
    async fn delete(&self, username: &str) -> Result<bool, DomainError>;
    async fn add_favorite(&self, username: &str, movie_id: &str) -> Result<User, DomainError>;
    async fn remove_favorite(&self, username: &str, movie_id: &str)
        -> Result<User, DomainError>;
}

/// Trait for catalog operations
#[async_trait::async_trait]
pub trait MovieServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<Movie>, DomainError>;
    async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError>;
    async fn genre(&self, name: &str) -> Result<Option<Genre>, DomainError>;
    async fn director(&self, name: &str) -> Result<Option<Director>, DomainError>;
    async fn create(&self, request: CreateMovieRequest) -> Result<Movie, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl AuthServiceTrait for AuthService {
    async fn verify(&self, username: &str, password: &str) -> Result<User, AuthFailure> {
        AuthService::verify(self, username, password).await
    }

    fn issue(&self, user: &User) -> Result<String, DomainError> {
        AuthService::issue(self, user)
    }

    async fn validate(&self, token: &str) -> Result<User, AuthFailure> {
        AuthService::validate(self, token).await
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        UserService::register(self, request).await
    }

    async fn get(&self, username: &str) -> Result<Option<User>, DomainError> {
        UserService::get(self, username).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }

    async fn update(
        &self,
        username: &str,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        UserService::update(self, username, request).await
    }

    async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        UserService::delete(self, username).await
    }

    async fn add_favorite(&self, username: &str, movie_id: &str) -> Result<User, DomainError> {
        UserService::add_favorite(self, username, movie_id).await
    }

    async fn remove_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<User, DomainError> {
        UserService::remove_favorite(self, username, movie_id).await
    }
}

#[async_trait::async_trait]
impl MovieServiceTrait for MovieService {
    async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        MovieService::list(self).await
    }

    async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        MovieService::get_by_title(self, title).await
    }

    async fn genre(&self, name: &str) -> Result<Option<Genre>, DomainError> {
        MovieService::genre(self, name).await
    }

    async fn director(&self, name: &str) -> Result<Option<Director>, DomainError> {
        MovieService::director(self, name).await
    }

    async fn create(&self, request: CreateMovieRequest) -> Result<Movie, DomainError> {
        MovieService::create(self, request).await
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        MovieService::delete(self, id).await
    }
}

impl AppState {
    pub fn new(
        auth_service: Arc<dyn AuthServiceTrait>,
        user_service: Arc<dyn UserServiceTrait>,
        movie_service: Arc<dyn MovieServiceTrait>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            movie_service,
        }
    }
}
