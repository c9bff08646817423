//! DTOs for the list statistics endpoint.

use serde::Serialize;

use crate::api::dto::blogs::BlogResponse;
use crate::application::services::ListSummary;
use crate::domain::list_stats::{AuthorBlogs, AuthorLikes};

/// Summary statistics over the whole blog list.
///
/// `favorite_blog`, `most_blogs`, and `most_likes` are `null` when no
/// blogs exist.
#[derive(Debug, Serialize)]
pub struct ListSummaryResponse {
    pub blogs: i64,
    pub total_likes: i64,
    pub favorite_blog: Option<BlogResponse>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

impl From<ListSummary> for ListSummaryResponse {
    fn from(summary: ListSummary) -> Self {
        Self {
            blogs: summary.blogs,
            total_likes: summary.total_likes,
            favorite_blog: summary.favorite_blog.map(BlogResponse::from),
            most_blogs: summary.most_blogs,
            most_likes: summary.most_likes,
        }
    }
}
