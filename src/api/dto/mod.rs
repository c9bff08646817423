//! Request and response DTOs.

pub mod blogs;
pub mod health;
pub mod login;
pub mod stats;
pub mod users;
