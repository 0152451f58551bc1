//! Movie entity

use serde::{Deserialize, Serialize};

use super::validation::{validate_movie_id, MovieValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Movie identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Result<Self, MovieValidationError> {
        let id = id.into();
        validate_movie_id(&id)?;
        Ok(Self(id))
    }

    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl StorageKey for MovieId {
    fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MovieId {
    type Error = MovieValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MovieId> for String {
    fn from(id: MovieId) -> Self {
        id.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Genre embedded in a movie document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// Director embedded in a movie document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Director {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Bio", default)]
    pub bio: String,
}

/// Movie as stored in the `movies` document collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id")]
    id: MovieId,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Genre", default)]
    genre: Genre,
    #[serde(rename = "Director", default)]
    director: Director,
    #[serde(rename = "Actors", default)]
    actors: Vec<String>,
    #[serde(rename = "ImagePath", default, skip_serializing_if = "Option::is_none")]
    image_path: Option<String>,
    #[serde(rename = "Featured", default)]
    featured: bool,
}

impl Movie {
    pub fn new(id: MovieId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            genre: Genre::default(),
            director: Director::default(),
            actors: Vec::new(),
            image_path: None,
            featured: false,
        }
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = genre;
        self
    }

    pub fn with_director(mut self, director: Director) -> Self {
        self.director = director;
        self
    }

    pub fn with_actors(mut self, actors: Vec<String>) -> Self {
        self.actors = actors;
        self
    }

    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn id(&self) -> &MovieId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre(&self) -> &Genre {
        &self.genre
    }

    pub fn director(&self) -> &Director {
        &self.director
    }

    pub fn actors(&self) -> &[String] {
        &self.actors
    }

    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

impl StorageEntity for Movie {
    type Key = MovieId;

    fn key(&self) -> &Self::Key {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_document_shape() {
        let movie = Movie::new(MovieId::new("pulse").unwrap(), "Pulse", "Live at Earls Court")
            .with_genre(Genre {
                name: "Concert".to_string(),
                description: "Recorded live performances".to_string(),
            })
            .with_director(Director {
                name: "David Mallet".to_string(),
                bio: "Music video director".to_string(),
            })
            .with_actors(vec!["David Gilmour".to_string()])
            .with_featured(true);

        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["_id"], "pulse");
        assert_eq!(json["Title"], "Pulse");
        assert_eq!(json["Genre"]["Name"], "Concert");
        assert_eq!(json["Director"]["Name"], "David Mallet");
        assert_eq!(json["Actors"][0], "David Gilmour");
        assert_eq!(json["Featured"], true);
        assert!(json.get("ImagePath").is_none());
    }

    #[test]
    fn test_movie_document_defaults() {
        let movie: Movie = serde_json::from_value(serde_json::json!({
            "_id": "m1",
            "Title": "Kiss the Cloud",
            "Description": "Yello featuring Fifi Rong"
        }))
        .unwrap();

        assert_eq!(movie.genre(), &Genre::default());
        assert!(movie.actors().is_empty());
        assert!(!movie.is_featured());
    }

    #[test]
    fn test_movie_id_rejects_invalid() {
        let result: Result<Movie, _> = serde_json::from_value(serde_json::json!({
            "_id": "not valid!",
            "Title": "x",
            "Description": "y"
        }));
        assert!(result.is_err());
    }
}
