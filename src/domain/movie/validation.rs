//! Movie validation utilities

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for movie IDs
pub const MAX_MOVIE_ID_LENGTH: usize = 50;

/// Maximum length for movie titles
pub const MAX_TITLE_LENGTH: usize = 200;

/// Regex pattern for valid movie IDs (alphanumeric + hyphens)
static MOVIE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9][a-zA-Z0-9-]*[a-zA-Z0-9]$|^[a-zA-Z0-9]$").unwrap());

/// Movie validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum MovieValidationError {
    /// Movie ID is empty
    EmptyId,
    /// Movie ID exceeds maximum length
    IdTooLong { length: usize, max: usize },
    /// Movie ID contains invalid characters
    InvalidIdFormat { id: String },
    /// Title is empty
    EmptyTitle,
    /// Title exceeds maximum length
    TitleTooLong { length: usize, max: usize },
    /// Description is empty
    EmptyDescription,
}

impl fmt::Display for MovieValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "Movie ID cannot be empty"),
            Self::IdTooLong { length, max } => {
                write!(f, "Movie ID too long: {} characters (max {})", length, max)
            }
            Self::InvalidIdFormat { id } => write!(
                f,
                "Invalid movie ID format '{}': must be alphanumeric with hyphens, cannot start or end with hyphen",
                id
            ),
            Self::EmptyTitle => write!(f, "Title is required"),
            Self::TitleTooLong { length, max } => {
                write!(f, "Title too long: {} characters (max {})", length, max)
            }
            Self::EmptyDescription => write!(f, "Description is required"),
        }
    }
}

impl std::error::Error for MovieValidationError {}

/// Validate a movie ID
pub fn validate_movie_id(id: &str) -> Result<(), MovieValidationError> {
    if id.is_empty() {
        return Err(MovieValidationError::EmptyId);
    }

    if id.len() > MAX_MOVIE_ID_LENGTH {
        return Err(MovieValidationError::IdTooLong {
            length: id.len(),
            max: MAX_MOVIE_ID_LENGTH,
        });
    }

    if !MOVIE_ID_PATTERN.is_match(id) {
        return Err(MovieValidationError::InvalidIdFormat { id: id.to_string() });
    }

    Ok(())
}

/// Validate the required text fields of a movie
pub fn validate_movie_fields(title: &str, description: &str) -> Result<(), MovieValidationError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(MovieValidationError::EmptyTitle);
    }

    if title.len() > MAX_TITLE_LENGTH {
        return Err(MovieValidationError::TitleTooLong {
            length: title.len(),
            max: MAX_TITLE_LENGTH,
        });
    }

    if description.trim().is_empty() {
        return Err(MovieValidationError::EmptyDescription);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_movie_ids() {
        assert!(validate_movie_id("a").is_ok());
        assert!(validate_movie_id("pulse-1995").is_ok());
        assert!(validate_movie_id("6215f4c1a1b2c3d4e5f60718").is_ok());
    }

    #[test]
    fn test_invalid_movie_ids() {
        assert_eq!(validate_movie_id(""), Err(MovieValidationError::EmptyId));
        assert!(matches!(
            validate_movie_id(&"a".repeat(51)),
            Err(MovieValidationError::IdTooLong { length: 51, max: 50 })
        ));
        assert!(matches!(
            validate_movie_id("-pulse"),
            Err(MovieValidationError::InvalidIdFormat { .. })
        ));
        assert!(matches!(
            validate_movie_id("pulse 1995"),
            Err(MovieValidationError::InvalidIdFormat { .. })
        ));
    }

    #[test]
    fn test_movie_fields() {
        assert!(validate_movie_fields("Pulse", "Pink Floyd live in 1994").is_ok());
        assert_eq!(
            validate_movie_fields("   ", "desc"),
            Err(MovieValidationError::EmptyTitle)
        );
        assert_eq!(
            validate_movie_fields("Pulse", ""),
            Err(MovieValidationError::EmptyDescription)
        );
        assert!(matches!(
            validate_movie_fields(&"t".repeat(201), "desc"),
            Err(MovieValidationError::TitleTooLong { .. })
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(MovieValidationError::EmptyTitle.to_string(), "Title is required");
    }
}
