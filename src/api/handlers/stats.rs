//! Handler for the list statistics endpoint.

use axum::{Json, extract::State};

use crate::api::dto::stats::ListSummaryResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns aggregate statistics over all blog entries.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// {
///   "blogs": 3,
///   "total_likes": 24,
///   "favorite_blog": { "id": 3, "title": "...", "likes": 12, ... },
///   "most_blogs": { "author": "Edsger W. Dijkstra", "blogs": 2 },
///   "most_likes": { "author": "Edsger W. Dijkstra", "likes": 17 }
/// }
/// ```
///
/// With no blogs stored, the counts are 0 and the derived fields are
/// `null`.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<ListSummaryResponse>, AppError> {
    let summary = state.stats_service.summary().await?;

    Ok(Json(summary.into()))
}
