//! API route configuration.

use crate::api::handlers::submit_app_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Public API routes. No authentication.
///
/// # Endpoints
///
/// - `POST /submit-app` - Relay a visitor's app submission
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/submit-app", post(submit_app_handler))
}
