//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, BlogService, StatsService, UserService};
use crate::infrastructure::persistence::{PgBlogRepository, PgUserRepository};

/// Application state holding the service layer.
///
/// Cheap to clone; all services are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub blog_service: Arc<BlogService<PgBlogRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub stats_service: Arc<StatsService<PgBlogRepository>>,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(pool: Arc<PgPool>, token_signing_secret: &str, token_ttl_seconds: u64) -> Self {
        let blog_repository = Arc::new(PgBlogRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool));

        Self {
            blog_service: Arc::new(BlogService::new(blog_repository.clone())),
            user_service: Arc::new(UserService::new(user_repository.clone())),
            auth_service: Arc::new(AuthService::new(
                user_repository,
                token_signing_secret,
                token_ttl_seconds,
            )),
            stats_service: Arc::new(StatsService::new(blog_repository)),
        }
    }
}
