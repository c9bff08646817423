//! Handlers for blog entry endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::blogs::{BlogResponse, CreateBlogRequest, UpdateBlogRequest};
use crate::domain::entities::{BlogPatch, User};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all blog entries.
///
/// # Endpoint
///
/// `GET /api/blogs`
///
/// # Response
///
/// A JSON array of blog entries, in creation order.
pub async fn blog_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, AppError> {
    let blogs = state.blog_service.list_blogs().await?;

    Ok(Json(blogs.into_iter().map(BlogResponse::from).collect()))
}

/// Retrieves a single blog entry.
///
/// # Endpoint
///
/// `GET /api/blogs/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no entry matches the ID.
pub async fn get_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BlogResponse>, AppError> {
    let blog = state.blog_service.get_blog(id).await?;

    Ok(Json(blog.into()))
}

/// Creates a blog entry owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /api/blogs` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Canonical string reduction",
///   "author": "Edsger W. Dijkstra",
///   "url": "https://example.com/ewd808",
///   "likes": 12   // optional, defaults to 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the title, author, or url is missing or
/// invalid.
pub async fn create_blog_handler(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<BlogResponse>), AppError> {
    payload.validate()?;

    let blog = state
        .blog_service
        .create_blog(
            payload.title,
            payload.author,
            payload.url,
            payload.likes,
            &user,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(blog.into())))
}

/// Partially updates a blog entry (typically the like count).
///
/// # Endpoint
///
/// `PUT /api/blogs/{id}` (Bearer token required)
///
/// # Request Body
///
/// All fields are optional. Only provided fields are changed.
///
/// # Errors
///
/// Returns 404 Not Found if no entry matches the ID.
/// Returns 400 Bad Request if validation fails.
pub async fn update_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, AppError> {
    payload.validate()?;

    let patch = BlogPatch {
        title: payload.title,
        author: payload.author,
        url: payload.url,
        likes: payload.likes,
    };

    let blog = state.blog_service.update_blog(id, patch).await?;

    Ok(Json(blog.into()))
}

/// Deletes a blog entry. Only the creator may delete it.
///
/// # Endpoint
///
/// `DELETE /api/blogs/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 404 Not Found if no entry matches the ID.
/// Returns 401 Unauthorized if the caller did not create the entry.
pub async fn delete_blog_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(user): Extension<User>,
) -> Result<StatusCode, AppError> {
    state.blog_service.delete_blog(id, &user).await?;

    Ok(StatusCode::NO_CONTENT)
}
