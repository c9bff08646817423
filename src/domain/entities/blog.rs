//! Blog entity representing a single blog post entry.

use chrono::{DateTime, Utc};

/// A blog post entry with its like count and creator.
///
/// The `username` field is the creator's username joined in by the
/// persistence layer for responses; it is `None` when the row is read
/// without the join.
#[derive(Debug, Clone)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Blog {
    /// Creates a new Blog instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: String,
        author: String,
        url: String,
        likes: i64,
        user_id: i64,
        username: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            author,
            url,
            likes,
            user_id,
            username,
            created_at,
        }
    }

    /// Returns true if the given user created this blog entry.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.user_id == user_id
    }
}

/// Input data for creating a new blog entry.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub url: String,
    pub likes: i64,
    pub user_id: i64,
}

/// Partial update for an existing blog entry.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub url: Option<String>,
    pub likes: Option<i64>,
}
