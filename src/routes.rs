//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`                - Directory page (public)
//! - `POST /api/submit-app`  - Submission relay (public)
//! - `GET  /health`          - Health check: record store, submission ledger
//! - `/static/*`             - Page script and stylesheet
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the routes with state and tracing applied.
///
/// Used directly by integration tests; the server wraps it in
/// [`app_router`].
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::public_routes())
        .nest("/api", api::routes::public_routes())
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing-slash normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
