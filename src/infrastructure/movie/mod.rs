//! Movie catalog infrastructure

mod repository;
mod seed;
mod service;

pub use repository::StorageMovieRepository;
pub use seed::demo_movies;
pub use service::{CreateMovieRequest, MovieService};
