//! Movie catalog domain

mod entity;
mod repository;
mod validation;

pub use entity::{Director, Genre, Movie, MovieId};
pub use repository::MovieRepository;
pub use validation::{validate_movie_fields, validate_movie_id, MovieValidationError};

#[cfg(test)]
pub use repository::MockMovieRepository;
