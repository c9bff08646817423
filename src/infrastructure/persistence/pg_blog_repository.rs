//! PostgreSQL implementation of the blog repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Blog, BlogPatch, NewBlog};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Database row for a blog entry joined with its creator's username.
#[derive(sqlx::FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    author: String,
    url: String,
    likes: i64,
    user_id: i64,
    username: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog::new(
            row.id,
            row.title,
            row.author,
            row.url,
            row.likes,
            row.user_id,
            row.username,
            row.created_at,
        )
    }
}

/// PostgreSQL repository for blog storage and retrieval.
///
/// Uses parameterized statements for SQL injection protection.
pub struct PgBlogRepository {
    pool: Arc<PgPool>,
}

impl PgBlogRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogRepository for PgBlogRepository {
    async fn create(&self, new_blog: NewBlog) -> Result<Blog, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            WITH inserted AS (
                INSERT INTO blogs (title, author, url, likes, user_id)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT
                i.id,
                i.title,
                i.author,
                i.url,
                i.likes,
                i.user_id,
                u.username,
                i.created_at
            FROM inserted i
            LEFT JOIN users u ON u.id = i.user_id
            "#,
        )
        .bind(new_blog.title)
        .bind(new_blog.author)
        .bind(new_blog.url)
        .bind(new_blog.likes)
        .bind(new_blog.user_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Blog>, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id, u.username, b.created_at
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            WHERE b.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Blog::from))
    }

    async fn list_all(&self) -> Result<Vec<Blog>, AppError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT b.id, b.title, b.author, b.url, b.likes, b.user_id, u.username, b.created_at
            FROM blogs b
            LEFT JOIN users u ON u.id = b.user_id
            ORDER BY b.id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn update(&self, id: i64, patch: BlogPatch) -> Result<Blog, AppError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            WITH updated AS (
                UPDATE blogs SET
                    title  = COALESCE($2, title),
                    author = COALESCE($3, author),
                    url    = COALESCE($4, url),
                    likes  = COALESCE($5, likes)
                WHERE id = $1
                RETURNING id, title, author, url, likes, user_id, created_at
            )
            SELECT
                up.id,
                up.title,
                up.author,
                up.url,
                up.likes,
                up.user_id,
                u.username,
                up.created_at
            FROM updated up
            LEFT JOIN users u ON u.id = up.user_id
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.author)
        .bind(patch.url)
        .bind(patch.likes)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Blog::from)
            .ok_or_else(|| AppError::not_found("Blog not found", serde_json::json!({ "id": id })))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
