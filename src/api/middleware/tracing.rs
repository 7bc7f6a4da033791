//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

/// Creates the request tracing layer applied to every route.
///
/// - span per request at `INFO` (method, URI, version)
/// - request start at `DEBUG`
/// - response status and latency in milliseconds at `INFO`
/// - 5xx responses and transport failures at `WARN`
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/ version=HTTP/1.1}: finished processing request latency=212 ms status=200
/// WARN request{method=POST uri=/api/submit-app version=HTTP/1.1}: response failed classification=Status code: 502 Bad Gateway latency=98 ms
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
