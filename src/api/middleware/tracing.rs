//! HTTP request/response tracing middleware.

use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates a tracing middleware for HTTP requests.
///
/// # Logging Behavior
///
/// **On Request:**
/// - Creates a span at `INFO` level with the method, URI and HTTP version
///
/// **On Response:**
/// - Logs status code and latency in milliseconds at `INFO` level
///
/// # Example Logs
///
/// ```text
/// INFO request{method=GET uri=/aZ3kQ9pLm2 version=HTTP/1.1}: started processing request
/// INFO request{method=GET uri=/aZ3kQ9pLm2 version=HTTP/1.1}: finished processing request latency=3 ms status=307
/// ```
///
/// # Integration
///
/// ```rust,ignore
/// let app = api_routes()
///     .with_state(state)
///     .layer(tracing::layer());
/// ```
pub fn layer()
-> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
