//! Handler for the app submission endpoint.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::api::dto::submit::SubmitAppRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Relays a visitor's app submission to the store.
///
/// # Endpoint
///
/// `POST /api/submit-app`
///
/// # Request Body
///
/// JSON or form-encoded:
///
/// ```json
/// {
///   "email": "john@doe.io",
///   "link": "https://pomo.example",
///   "twitter": "@johndoe",          // optional
///   "idempotency_key": "5c1f..."    // optional
/// }
/// ```
///
/// # Response
///
/// - the store's 2xx status with body `{}` when it accepted the record, or
///   **200** when the key was already relayed
/// - **409** with body `{}` while a relay with the same key is still in flight
/// - **400** with an error body when validation fails or the body is unreadable
/// - the store's status, or **500** when the store is unreachable, with body `{}`
pub async fn submit_app_handler(
    State(state): State<AppState>,
    payload: SubmitAppRequest,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (submission, idempotency_key) = payload.into_parts();

    let result = state
        .submission_service
        .relay(submission, idempotency_key.as_deref())
        .await?;

    if result.is_success() {
        let status = StatusCode::from_u16(result.status).unwrap_or(StatusCode::OK);
        Ok((status, Json(json!({}))))
    } else {
        Err(AppError::upstream(result.status))
    }
}
