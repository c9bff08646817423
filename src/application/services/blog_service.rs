//! Blog entry creation, retrieval, update, and deletion.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Blog, BlogPatch, NewBlog, User};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Service for managing blog entries.
///
/// Creation records the authenticated user as the entry's creator, and
/// deletion is restricted to that creator.
pub struct BlogService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> BlogService<R> {
    /// Creates a new blog service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a blog entry owned by `creator`.
    ///
    /// A missing like count defaults to 0.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_blog(
        &self,
        title: String,
        author: String,
        url: String,
        likes: Option<i64>,
        creator: &User,
    ) -> Result<Blog, AppError> {
        let new_blog = NewBlog {
            title,
            author,
            url,
            likes: likes.unwrap_or(0),
            user_id: creator.id,
        };

        self.repository.create(new_blog).await
    }

    /// Lists all blog entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_blogs(&self) -> Result<Vec<Blog>, AppError> {
        self.repository.list_all().await
    }

    /// Retrieves a blog entry by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry matches the ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_blog(&self, id: i64) -> Result<Blog, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Blog not found", json!({ "id": id })))
    }

    /// Partially updates a blog entry.
    ///
    /// Any authenticated user may update an entry (the usual case is
    /// bumping the like count).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry matches the ID.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update_blog(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        self.repository.update(id, patch).await
    }

    /// Deletes a blog entry.
    ///
    /// Only the user who created the entry may delete it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no entry matches the ID.
    /// Returns [`AppError::Unauthorized`] if `user` is not the creator.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_blog(&self, id: i64, user: &User) -> Result<(), AppError> {
        let blog = self.get_blog(id).await?;

        if !blog.is_owned_by(user.id) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "A blog can only be deleted by its creator" }),
            ));
        }

        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found("Blog not found", json!({ "id": id })));
        }

        Ok(())
    }
}
