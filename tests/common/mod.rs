#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use bloglist::api::handlers::{
    blog_list_handler, create_blog_handler, create_user_handler, delete_blog_handler,
    get_blog_handler, login_handler, stats_handler, update_blog_handler, user_list_handler,
};
use bloglist::api::middleware::auth;
use bloglist::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

/// Cheap bcrypt cost for fixtures.
const TEST_BCRYPT_COST: u32 = 4;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TEST_SIGNING_SECRET, 3600)
}

/// Router with the blog, user, login, and stats routes wired the same way
/// as the application router: reads public, blog writes behind the auth
/// middleware.
pub fn test_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/blogs", post(create_blog_handler))
        .route(
            "/api/blogs/{id}",
            put(update_blog_handler).delete(delete_blog_handler),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    let public = Router::new()
        .route("/api/blogs", get(blog_list_handler))
        .route("/api/blogs/{id}", get(get_blog_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/users", get(user_list_handler).post(create_user_handler))
        .route("/api/login", post(login_handler));

    Router::new().merge(protected).merge(public).with_state(state)
}

pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    let password_hash = bcrypt::hash(password, TEST_BCRYPT_COST).unwrap();

    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, name, password_hash) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(username)
    .bind("Test User")
    .bind(password_hash)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_blog(
    pool: &PgPool,
    title: &str,
    author: &str,
    likes: i64,
    user_id: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO blogs (title, author, url, likes, user_id) VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(title)
    .bind(author)
    .bind(format!("https://example.com/{}", title.replace(' ', "-")))
    .bind(likes)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn blogs_in_db(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn users_in_db(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Logs in through the auth service and returns a bearer token.
pub async fn login_token(state: &AppState, username: &str, password: &str) -> String {
    let (token, _user) = state.auth_service.login(username, password).await.unwrap();
    token
}
