//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: database connectivity (public)
//! - `/api/*`       - REST API; reads, registration, and login are public,
//!   writes to blogs require a Bearer token
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on authenticated writes
//! - **Authentication** - Bearer token on the protected route set
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// The public and protected sets share paths (`GET /api/blogs` is public,
/// `POST /api/blogs` is not); the method routers are merged so the auth
/// middleware only guards the protected methods.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer))
        .layer(rate_limit::secure_layer());

    let public = api::routes::public_routes().layer(rate_limit::layer());

    let api_router = Router::new().merge(protected).merge(public);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
