//! Account request and response bodies

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::user::User;
use crate::infrastructure::user::{RegisterUserRequest, UpdateUserRequest};

/// Public view of an account; the password hash is never part of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "FavoriteMovies")]
    pub favorite_movies: Vec<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            birthday: user.birthday(),
            favorite_movies: user
                .favorite_movies()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

/// Body of `POST /users`
#[derive(Debug, Deserialize)]
pub struct RegisterUserBody {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Birthday", default)]
    pub birthday: Option<NaiveDate>,
}

impl From<RegisterUserBody> for RegisterUserRequest {
    fn from(body: RegisterUserBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
            email: body.email,
            birthday: body.birthday,
        }
    }
}

/// Body of `PUT /users/{username}`
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserBody {
    #[serde(rename = "Username", default)]
    pub username: Option<String>,
    #[serde(rename = "Password", default)]
    pub password: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Option<String>,
    #[serde(rename = "Birthday", default)]
    pub birthday: Option<NaiveDate>,
}

impl From<UpdateUserBody> for UpdateUserRequest {
    fn from(body: UpdateUserBody) -> Self {
        Self {
            username: body.username,
            password: body.password,
            email: body.email,
            birthday: body.birthday,
        }
    }
}

/// Plain `{ "message" }` acknowledgement
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::movie::MovieId;
    use crate::domain::user::UserId;

    fn user() -> User {
        let mut user = User::new(
            UserId::new("user-1").unwrap(),
            "justincase",
            "$2b$10$storedhash",
            "justin@example.com",
            NaiveDate::from_ymd_opt(1990, 5, 17),
        );
        user.add_favorite(MovieId::new("pulse").unwrap());
        user
    }

    #[test]
    fn test_response_omits_password() {
        let json = serde_json::to_value(UserResponse::from(&user())).unwrap();

        assert_eq!(json["_id"], "user-1");
        assert_eq!(json["Username"], "justincase");
        assert_eq!(json["Email"], "justin@example.com");
        assert_eq!(json["Birthday"], "1990-05-17");
        assert_eq!(json["FavoriteMovies"][0], "pulse");
        assert!(json.get("Password").is_none());
        assert!(!json.to_string().contains("storedhash"));
    }

    #[test]
    fn test_register_body_uses_document_field_names() {
        let body: RegisterUserBody = serde_json::from_str(
            r#"{"Username":"justincase","Password":"pw","Email":"j@example.com"}"#,
        )
        .unwrap();

        let request = RegisterUserRequest::from(body);
        assert_eq!(request.username, "justincase");
        assert!(request.birthday.is_none());
    }

    #[test]
    fn test_update_body_is_partial() {
        let body: UpdateUserBody = serde_json::from_str(r#"{"Email":"new@example.com"}"#).unwrap();
        let request = UpdateUserRequest::from(body);

        assert_eq!(request.email.as_deref(), Some("new@example.com"));
        assert!(request.username.is_none());
        assert!(request.password.is_none());
    }
}
