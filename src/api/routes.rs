//! API route configuration.
//!
//! Routes are split into a public set and a set requiring Bearer token
//! authentication via [`crate::api::middleware::auth`]; the split is
//! assembled in [`crate::routes`].

use crate::api::handlers::{
    blog_list_handler, create_blog_handler, create_user_handler, delete_blog_handler,
    get_blog_handler, login_handler, stats_handler, update_blog_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes that require no authentication.
///
/// # Endpoints
///
/// - `GET  /blogs`       - List all blog entries
/// - `GET  /blogs/{id}`  - Single blog entry
/// - `GET  /stats`       - Aggregate list statistics
/// - `GET  /users`       - List users
/// - `POST /users`       - Register a user
/// - `POST /login`       - Issue a bearer token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blog_list_handler))
        .route("/blogs/{id}", get(get_blog_handler))
        .route("/stats", get(stats_handler))
        .route("/users", get(user_list_handler).post(create_user_handler))
        .route("/login", post(login_handler))
}

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST   /blogs`       - Create a blog entry
/// - `PUT    /blogs/{id}`  - Update a blog entry
/// - `DELETE /blogs/{id}`  - Delete a blog entry (creator only)
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", post(create_blog_handler))
        .route(
            "/blogs/{id}",
            put(update_blog_handler).delete(delete_blog_handler),
        )
}
