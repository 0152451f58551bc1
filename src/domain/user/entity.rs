//! User entity and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validation::{validate_user_id, UserValidationError};
use crate::domain::movie::MovieId;
use crate::domain::storage::{FieldPath, StorageEntity, StorageKey};

/// User identifier - alphanumeric + hyphens, max 50 characters
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Create a new UserId after validation
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        validate_user_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for UserId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User account as stored in the `users` document collection
///
/// The `Password` field holds a salted one-way hash. It is part of the stored
/// document but must never be echoed back to clients; use the API response
/// types for anything that leaves the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    id: UserId,
    #[serde(rename = "Username")]
    username: String,
    #[serde(rename = "Password")]
    password_hash: String,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    birthday: Option<NaiveDate>,
    #[serde(rename = "FavoriteMovies", default)]
    favorite_movies: Vec<MovieId>,
}

impl User {
    /// Create a new user from an already hashed password
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        email: impl Into<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            email: email.into(),
            birthday,
            favorite_movies: Vec::new(),
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn birthday(&self) -> Option<NaiveDate> {
        self.birthday
    }

    pub fn favorite_movies(&self) -> &[MovieId] {
        &self.favorite_movies
    }

    // Mutators

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_password_hash(&mut self, password_hash: impl Into<String>) {
        self.password_hash = password_hash.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_birthday(&mut self, birthday: Option<NaiveDate>) {
        self.birthday = birthday;
    }

    /// Add a movie to the favorites list; returns false if it was already there
    pub fn add_favorite(&mut self, movie_id: MovieId) -> bool {
        if self.favorite_movies.contains(&movie_id) {
            return false;
        }

        self.favorite_movies.push(movie_id);
        true
    }

    /// Remove a movie from the favorites list; returns false if it was absent
    pub fn remove_favorite(&mut self, movie_id: &MovieId) -> bool {
        let before = self.favorite_movies.len();
        self.favorite_movies.retain(|m| m != movie_id);
        self.favorite_movies.len() != before
    }
}

const UNIQUE_FIELDS: &[FieldPath<'static>] = &[FieldPath::new("Username")];

impl StorageEntity for User {
    type Key = UserId;

    fn key(&self) -> &Self::Key {
        &self.id
    }

    fn unique_fields() -> &'static [FieldPath<'static>] {
        UNIQUE_FIELDS
    }
}
