//! Movie catalog service

use std::sync::Arc;

use tracing::info;

use crate::domain::movie::{
    validate_movie_fields, Director, Genre, Movie, MovieId, MovieRepository,
};
use crate::domain::DomainError;

/// Request for adding a movie to the catalog
#[derive(Debug, Clone, Default)]
pub struct CreateMovieRequest {
    pub title: String,
    pub description: String,
    pub genre: Genre,
    pub director: Director,
    pub actors: Vec<String>,
    pub image_path: Option<String>,
    pub featured: bool,
}

/// Movie catalog service
pub struct MovieService {
    movies: Arc<dyn MovieRepository>,
}

impl MovieService {
    pub fn new(movies: Arc<dyn MovieRepository>) -> Self {
        Self { movies }
    }

    pub async fn list(&self) -> Result<Vec<Movie>, DomainError> {
        self.movies.list().await
    }

    /// Get a movie by exact title
    pub async fn get_by_title(&self, title: &str) -> Result<Option<Movie>, DomainError> {
        self.movies.get_by_title(title).await
    }

    /// Genre details taken from the first movie filed under that genre
    pub async fn genre(&self, name: &str) -> Result<Option<Genre>, DomainError> {
        let movies = self.movies.find_by_genre(name).await?;
        Ok(movies.into_iter().next().map(|movie| movie.genre().clone()))
    }

    /// Director details taken from the first movie by that director
    pub async fn director(&self, name: &str) -> Result<Option<Director>, DomainError> {
        let movies = self.movies.find_by_director(name).await?;
        Ok(movies.into_iter().next().map(|movie| movie.director().clone()))
    }

    pub async fn create(&self, request: CreateMovieRequest) -> Result<Movie, DomainError> {
        validate_movie_fields(&request.title, &request.description)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if self.movies.get_by_title(&request.title).await?.is_some() {
            return Err(DomainError::conflict(format!(
                "{} already exists",
                request.title
            )));
        }

        let mut movie = Movie::new(MovieId::generate(), request.title, request.description)
            .with_genre(request.genre)
            .with_director(request.director)
            .with_actors(request.actors)
            .with_featured(request.featured);

        if let Some(image_path) = request.image_path {
            movie = movie.with_image_path(image_path);
        }

        let movie = self.movies.create(movie).await?;
        info!(movie_id = %movie.id(), title = %movie.title(), "Movie created");

        Ok(movie)
    }

    /// Delete a movie by id, returns false if it did not exist
    pub async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let id = MovieId::new(id).map_err(|e| DomainError::invalid_id(e.to_string()))?;
        self.movies.delete(&id).await
    }
}
