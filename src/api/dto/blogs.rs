//! DTOs for blog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Blog;

/// Request to create a blog entry.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogRequest {
    #[validate(length(min = 1, message = "title required"))]
    pub title: String,

    #[validate(length(min = 1, message = "author required"))]
    pub author: String,

    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Defaults to 0 when omitted.
    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// Partial update for a blog entry. Only provided fields are changed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogRequest {
    #[validate(length(min = 1, message = "title required"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "author required"))]
    pub author: Option<String>,

    #[validate(url(message = "Invalid URL format"))]
    pub url: Option<String>,

    #[validate(range(min = 0, message = "likes must not be negative"))]
    pub likes: Option<i64>,
}

/// The user a blog entry was created by.
#[derive(Debug, Serialize)]
pub struct CreatorInfo {
    pub id: i64,
    pub username: String,
}

/// JSON representation of a blog entry.
#[derive(Debug, Serialize)]
pub struct BlogResponse {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user: Option<CreatorInfo>,
    pub created_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponse {
    fn from(blog: Blog) -> Self {
        let user = blog.username.map(|username| CreatorInfo {
            id: blog.user_id,
            username,
        });

        Self {
            id: blog.id,
            title: blog.title,
            author: blog.author,
            url: blog.url,
            likes: blog.likes,
            user,
            created_at: blog.created_at,
        }
    }
}
