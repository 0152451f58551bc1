//! Storage-backed movie repository

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::movie::{Movie, MovieId, MovieRepository};
use crate::domain::storage::{FieldPath, Storage};
use crate::domain::DomainError;

const TITLE: FieldPath<'static> = FieldPath::new("Title");
const GENRE_NAME: FieldPath<'static> = FieldPath::new("Genre.Name");
const DIRECTOR_NAME: FieldPath<'static> = FieldPath::new("Director.Name");

/// Movie repository over the `movies` document collection
#[derive(Debug)]
pub struct StorageMovieRepository {
    storage: Arc<dyn Storage<Movie>>,
}

impl StorageMovieRepository {
    pub fn new(storage: Arc<dyn Storage<Movie>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl MovieRepository for StorageMovieRepository {
    async fn get(&self, id: &MovieId) -> Result<Option<Movie>, DomainError> {
        self.storage.get(id).await
    }

    async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        self.storage.list().await
    }

    async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        self.storage.find_one_by(TITLE, title).await
    }

    async fn find_by_genre(&self, genre_name: &str) -> Result<Vec<Movie>, DomainError> {
        self.storage.find_by(GENRE_NAME, genre_name).await
    }

    async fn find_by_director(&self, director_name: &str) -> Result<Vec<Movie>, DomainError> {
        self.storage.find_by(DIRECTOR_NAME, director_name).await
    }

    async fn create(&self, movie: Movie) -> Result<Movie, DomainError> {
        self.storage.create(movie).await
    }

    async fn update(&self, movie: Movie) -> Result<Movie, DomainError> {
        self.storage.update(movie).await
    }

    async fn delete(&self, id: &MovieId) -> Result<bool, DomainError> {
        self.storage.delete(id).await
    }
}
