//! Movie request bodies

use serde::Deserialize;

use crate::domain::movie::{Director, Genre};
use crate::infrastructure::movie::CreateMovieRequest;

/// Body of `POST /movies`
#[derive(Debug, Deserialize)]
pub struct CreateMovieBody {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Genre", default)]
    pub genre: Genre,
    #[serde(rename = "Director", default)]
    pub director: Director,
    #[serde(rename = "Actors", default)]
    pub actors: Vec<String>,
    #[serde(rename = "ImagePath", default)]
    pub image_path: Option<String>,
    #[serde(rename = "Featured", default)]
    pub featured: bool,
}

impl From<CreateMovieBody> for CreateMovieRequest {
    fn from(body: CreateMovieBody) -> Self {
        Self {
            title: body.title,
            description: body.description,
            genre: body.genre,
            director: body.director,
            actors: body.actors,
            image_path: body.image_path,
            featured: body.featured,
        }
    }
}
