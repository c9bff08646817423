//! Aggregate statistics over the stored blog list.

use std::sync::Arc;

use crate::domain::entities::Blog;
use crate::domain::list_stats::{self, AuthorBlogs, AuthorLikes};
use crate::domain::repositories::BlogRepository;
use crate::error::AppError;

/// Summary statistics computed over the full blog list.
///
/// All derived fields are `None`/zero when the list is empty.
#[derive(Debug, Clone)]
pub struct ListSummary {
    pub blogs: i64,
    pub total_likes: i64,
    pub favorite_blog: Option<Blog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

/// Service producing list-wide statistics.
///
/// Fetches a snapshot of all blog entries once and derives every figure
/// from that snapshot, so the numbers in one response are mutually
/// consistent.
pub struct StatsService<R: BlogRepository> {
    repository: Arc<R>,
}

impl<R: BlogRepository> StatsService<R> {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Computes the summary over all stored blog entries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn summary(&self) -> Result<ListSummary, AppError> {
        let blogs = self.repository.list_all().await?;

        Ok(ListSummary {
            blogs: blogs.len() as i64,
            total_likes: list_stats::total_likes(&blogs),
            favorite_blog: list_stats::favorite_blog(&blogs).cloned(),
            most_blogs: list_stats::most_blogs(&blogs),
            most_likes: list_stats::most_likes(&blogs),
        })
    }

    /// Counts the stored blog entries without fetching them.
    ///
    /// Used by the health check.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_blogs(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockBlogRepository;
    use chrono::Utc;

    fn blog(id: i64, title: &str, author: &str, likes: i64) -> Blog {
        Blog::new(
            id,
            title.to_string(),
            author.to_string(),
            format!("https://example.com/{id}"),
            likes,
            1,
            None,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_summary_of_empty_list() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| Ok(vec![]));

        let service = StatsService::new(Arc::new(mock_repo));

        let summary = service.summary().await.unwrap();

        assert_eq!(summary.blogs, 0);
        assert_eq!(summary.total_likes, 0);
        assert!(summary.favorite_blog.is_none());
        assert!(summary.most_blogs.is_none());
        assert!(summary.most_likes.is_none());
    }

    #[tokio::test]
    async fn test_count_blogs() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_count().times(1).returning(|| Ok(42));

        let service = StatsService::new(Arc::new(mock_repo));

        assert_eq!(service.count_blogs().await.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_summary_over_mixed_authors() {
        let mut mock_repo = MockBlogRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                blog(1, "React patterns", "Michael Chan", 7),
                blog(2, "Go To Statement Considered Harmful", "Edsger W. Dijkstra", 5),
                blog(3, "Canonical string reduction", "Edsger W. Dijkstra", 12),
            ])
        });

        let service = StatsService::new(Arc::new(mock_repo));

        let summary = service.summary().await.unwrap();

        assert_eq!(summary.blogs, 3);
        assert_eq!(summary.total_likes, 24);
        assert_eq!(summary.favorite_blog.unwrap().id, 3);

        let most_blogs = summary.most_blogs.unwrap();
        assert_eq!(most_blogs.author, "Edsger W. Dijkstra");
        assert_eq!(most_blogs.blogs, 2);

        let most_likes = summary.most_likes.unwrap();
        assert_eq!(most_likes.author, "Edsger W. Dijkstra");
        assert_eq!(most_likes.likes, 17);
    }
}
