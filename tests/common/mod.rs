#![allow(dead_code)]

use app_directory::config::{StoreConfig, ValidationMode};
use app_directory::infrastructure::ledger::{MemoryLedger, NullLedger, SubmissionLedger};
use app_directory::infrastructure::notion::NotionStore;
use app_directory::state::AppState;
use app_directory::telemetry::AnalyticsConfig;
use axum::{
    Router,
    body::to_bytes,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TEST_TOKEN: &str = "secret_test_token";
pub const TEST_VERSION: &str = "2022-06-28";
pub const LISTINGS_DB: &str = "db-listings";
pub const REQUESTS_DB: &str = "db-requests";

/// One request received by the fake store.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub version: Option<String>,
    pub body: Value,
}

struct FakeState {
    query_status: u16,
    query_body: String,
    create_status: u16,
    requests: Vec<RecordedRequest>,
}

/// In-process stand-in for the Notion REST API, served on a loopback port.
#[derive(Clone)]
pub struct FakeNotion {
    inner: Arc<Mutex<FakeState>>,
    pub base_url: String,
}

impl FakeNotion {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(FakeState {
            query_status: 200,
            query_body: json!({ "results": [], "has_more": false }).to_string(),
            create_status: 200,
            requests: Vec::new(),
        }));

        let app = Router::new()
            .fallback(handle)
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            inner,
            base_url: format!("http://{addr}/v1"),
        }
    }

    /// Makes the listing query return these records.
    pub fn with_records(&self, records: Vec<Value>) {
        let mut state = self.inner.lock().unwrap();
        state.query_status = 200;
        state.query_body = json!({ "results": records, "has_more": false }).to_string();
    }

    /// Makes the listing query (and the health probe) answer with a raw body.
    pub fn with_query_response(&self, status: u16, body: &str) {
        let mut state = self.inner.lock().unwrap();
        state.query_status = status;
        state.query_body = body.to_string();
    }

    pub fn with_create_status(&self, status: u16) {
        self.inner.lock().unwrap().create_status = status;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn create_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.ends_with("/pages"))
            .collect()
    }

    pub fn store_config(&self) -> StoreConfig {
        store_config(&self.base_url)
    }
}

async fn handle(State(inner): State<Arc<Mutex<FakeState>>>, req: Request) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let authorization = header_value(&req, header::AUTHORIZATION.as_str());
    let version = header_value(&req, "notion-version");

    let bytes = to_bytes(req.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    let mut state = inner.lock().unwrap();
    state.requests.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        authorization,
        version,
        body,
    });

    let (status, body) = if path.ends_with("/pages") {
        (state.create_status, json!({ "object": "page" }).to_string())
    } else if path.ends_with("/query") {
        (state.query_status, state.query_body.clone())
    } else {
        (state.query_status, json!({ "object": "database" }).to_string())
    };

    (
        StatusCode::from_u16(status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

fn header_value(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub fn store_config(api_base: &str) -> StoreConfig {
    StoreConfig {
        api_base: api_base.to_string(),
        api_version: TEST_VERSION.to_string(),
        token: TEST_TOKEN.to_string(),
        listings_database_id: LISTINGS_DB.to_string(),
        submissions_database_id: REQUESTS_DB.to_string(),
        timeout_seconds: Some(5),
    }
}

/// A record shaped like the listing collection's rows.
pub fn record(name: &str, link: &str, description: &str) -> Value {
    json!({
        "object": "page",
        "id": format!("page-{name}"),
        "properties": {
            "name": { "title": [ { "text": { "content": name } } ] },
            "link": { "rich_text": [ { "plain_text": link } ] },
            "description": { "rich_text": [ { "plain_text": description } ] }
        }
    })
}

pub fn create_test_state(config: &StoreConfig, mode: ValidationMode) -> AppState {
    build_state(config, mode, Arc::new(NullLedger::new()), None)
}

pub fn create_test_state_with_ledger(config: &StoreConfig, mode: ValidationMode) -> AppState {
    build_state(
        config,
        mode,
        Arc::new(MemoryLedger::new(Duration::from_secs(600))),
        None,
    )
}

pub fn create_test_state_with_analytics(config: &StoreConfig) -> AppState {
    build_state(
        config,
        ValidationMode::Strict,
        Arc::new(NullLedger::new()),
        Some(AnalyticsConfig {
            key: "phc_test".to_string(),
            host: "https://eu.posthog.com".to_string(),
        }),
    )
}

fn build_state(
    config: &StoreConfig,
    mode: ValidationMode,
    ledger: Arc<dyn SubmissionLedger>,
    analytics: Option<AnalyticsConfig>,
) -> AppState {
    let store = Arc::new(NotionStore::new(config).unwrap());
    AppState::new(store, ledger, mode, analytics)
}
