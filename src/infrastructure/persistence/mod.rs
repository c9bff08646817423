//! PostgreSQL repository implementations.

mod pg_blog_repository;
mod pg_user_repository;

pub use pg_blog_repository::PgBlogRepository;
pub use pg_user_repository::PgUserRepository;
