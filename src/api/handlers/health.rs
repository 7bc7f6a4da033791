//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Record store**: Retrieves the listing collection with the configured credential
/// 2. **Submission ledger**: Reports whether de-duplication is active
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "record_store": { "status": "ok", "message": "Listing collection reachable" },
///     "submission_ledger": { "status": "ok", "message": "Tracking 3 keys" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let ledger_check = check_ledger(&state);

    let all_healthy = store_check.is_ok() && ledger_check.is_ok();

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            record_store: store_check,
            submission_ledger: ledger_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the listing collection can be read.
async fn check_store(state: &AppState) -> CheckStatus {
    match state.store.health_check().await {
        Ok(()) => CheckStatus::ok("Listing collection reachable"),
        Err(e) => CheckStatus::error(format!("Record store error: {}", e)),
    }
}

/// Reports the duplicate submission ledger state.
fn check_ledger(state: &AppState) -> CheckStatus {
    if state.ledger.is_enabled() {
        CheckStatus::ok(format!("Tracking {} keys", state.ledger.tracked()))
    } else {
        CheckStatus::ok("Disabled")
    }
}
