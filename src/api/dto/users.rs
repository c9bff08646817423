//! DTOs for user registration and listing.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::User;

/// Compiled regex for allowed username characters.
static USERNAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to register a new user.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "username should be at least 3 characters"))]
    #[validate(regex(
        path = "*USERNAME_REGEX",
        message = "username may only contain letters, digits, '-' and '_'"
    ))]
    pub username: String,

    #[validate(length(min = 1, message = "name required"))]
    pub name: String,

    #[validate(length(min = 3, message = "password should be at least 3 characters"))]
    pub password: String,
}

/// JSON representation of a user.
///
/// The password hash never appears here.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            created_at: user.created_at,
        }
    }
}
