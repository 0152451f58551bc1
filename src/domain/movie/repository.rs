//! Movie repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Movie, MovieId};
use crate::domain::DomainError;

/// Repository for the movie catalog
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, DomainError>;

    async fn list(&self) -> Result<Vec<Movie>, DomainError>;

    /// Exact title match
    async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError>;

    /// Movies whose genre name matches exactly
    async fn find_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DomainError>;

    /// Movies whose director name matches exactly
    async fn find_by_director(&self, director_name: &str) -> Result<Vec<Movie>, DomainError>;

    async fn create(&self, movie: Movie) -> Result<Movie, DomainError>;

    async fn update(&self, movie: Movie) -> Result<Movie, DomainError>;

    async fn delete(&self, id: &MovieId) -> Result<bool, DomainError>;
}
