//! Axum request handlers.

mod blogs;
mod health;
mod login;
mod stats;
mod users;

pub use blogs::{
    blog_list_handler, create_blog_handler, delete_blog_handler, get_blog_handler,
    update_blog_handler,
};
pub use health::health_handler;
pub use login::login_handler;
pub use stats::stats_handler;
pub use users::{create_user_handler, user_list_handler};
