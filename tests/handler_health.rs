mod common;

use app_directory::api::handlers::health_handler;
use app_directory::config::ValidationMode;
use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use common::FakeNotion;

#[tokio::test]
async fn test_health_endpoint_success() {
    let fake = FakeNotion::start().await;
    let state = common::create_test_state(&fake.store_config(), ValidationMode::Strict);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["record_store"]["status"], "ok");
    assert_eq!(json["checks"]["submission_ledger"]["status"], "ok");
    assert_eq!(json["checks"]["submission_ledger"]["message"], "Disabled");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let fake = FakeNotion::start().await;
    let state = common::create_test_state_with_ledger(&fake.store_config(), ValidationMode::Strict);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("record_store").is_some());
    assert_eq!(json["checks"]["submission_ledger"]["message"], "Tracking 0 keys");
}

#[tokio::test]
async fn test_health_endpoint_degraded_when_store_rejects() {
    let fake = FakeNotion::start().await;
    fake.with_query_response(401, r#"{"object":"error"}"#);
    let state = common::create_test_state(&fake.store_config(), ValidationMode::Strict);
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["record_store"]["status"], "error");
}
