//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`  - Health check: DB, media store (public)
//! - `/api/*`       - REST API (identity headers required per handler)
//! - `/media/*`     - Locally stored listing images (when enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `media_dir` - when set, serves stored images from this directory under
///   `/media` (the URLs the local media store hands out)
pub fn app_router(state: AppState, media_dir: Option<&Path>) -> NormalizePath<Router> {
    let mut router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes());

    if let Some(dir) = media_dir {
        router = router.nest_service("/media", ServeDir::new(dir));
    }

    let router = router.with_state(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
