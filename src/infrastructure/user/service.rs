//! User service for registration and profile management

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::movie::{MovieId, MovieRepository};
use crate::domain::user::{
    validate_email, validate_password, validate_username, User, UserId, UserRepository,
};
use crate::domain::DomainError;

use super::password::{hash_blocking, PasswordHasher};

/// Request for registering a new account
#[derive(Debug, Clone)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub birthday: Option<NaiveDate>,
}

/// Partial profile update; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// User service for account management
pub struct UserService {
    users: Arc<dyn UserRepository>,
    movies: Arc<dyn MovieRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        movies: Arc<dyn MovieRepository>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            users,
            movies,
            hasher,
        }
    }

    /// Register a new account, storing only the password hash
    pub async fn register(&self, request: RegisterUserRequest) -> Result<User, DomainError> {
        validate_username(&request.username).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_password(&request.password).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_email(&request.email).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.users.username_exists(&request.username).await? {
            return Err(DomainError::conflict(format!(
                "{} already exists",
                request.username
            )));
        }

        let password_hash = hash_blocking(&self.hasher, &request.password).await?;

        let user = User::new(
            UserId::generate(),
            request.username,
            password_hash,
            request.email,
            request.birthday,
        );

        let user = self.users.create(user).await?;
        info!(user_id = %user.id(), username = %user.username(), "User registered");

        Ok(user)
    }

    /// Get a user by username
    pub async fn get(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.users.get_by_username(username).await
    }

    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await
    }

    pub async fn count(&self) -> Result<usize, DomainError> {
        self.users.count().await
    }

    /// Update a profile; a new password is re-hashed before it is stored
    pub async fn update(
        &self,
        username: &str,
        request: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let mut user = self.require(username).await?;

        if let Some(new_username) = request.username {
            validate_username(&new_username).map_err(|e| DomainError::validation(e.to_string()))?;
            user.set_username(new_username);
        }

        if let Some(email) = request.email {
            validate_email(&email).map_err(|e| DomainError::validation(e.to_string()))?;
            user.set_email(email);
        }

        if let Some(password) = request.password {
            validate_password(&password).map_err(|e| DomainError::validation(e.to_string()))?;
            user.set_password_hash(hash_blocking(&self.hasher, &password).await?);
        }

        if request.birthday.is_some() {
            user.set_birthday(request.birthday);
        }

        let user = self.users.update(user).await?;
        debug!(user_id = %user.id(), "User updated");

        Ok(user)
    }

    /// Delete an account by username, returns false if it did not exist
    pub async fn delete(&self, username: &str) -> Result<bool, DomainError> {
        let Some(user) = self.users.get_by_username(username).await? else {
            return Ok(false);
        };

        let deleted = self.users.delete(user.id()).await?;
        if deleted {
            info!(user_id = %user.id(), username = %username, "User deleted");
        }

        Ok(deleted)
    }

    /// Add a movie to the user's favorites; adding twice is a no-op
    pub async fn add_favorite(&self, username: &str, movie_id: &str) -> Result<User, DomainError> {
        let movie_id = MovieId::new(movie_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;

        if self.movies.get(&movie_id).await?.is_none() {
            return Err(DomainError::not_found(format!("Movie '{}' not found", movie_id)));
        }

        let mut user = self.require(username).await?;

        if !user.add_favorite(movie_id) {
            return Ok(user);
        }

        self.users.update(user).await
    }

    /// Remove a movie from the user's favorites
    pub async fn remove_favorite(
        &self,
        username: &str,
        movie_id: &str,
    ) -> Result<User, DomainError> {
        let movie_id = MovieId::new(movie_id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        let mut user = self.require(username).await?;

        if !user.remove_favorite(&movie_id) {
            return Ok(user);
        }

        self.users.update(user).await
    }

    async fn require(&self, username: &str) -> Result<User, DomainError> {
        self.users
            .get_by_username(username)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("{} was not found", username)))
    }
}
