use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
pub const TRACE_ID_HEADER: &str = "x-trace-id";

static REQUEST_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Wraps every request in a span carrying request and trace ids, echoes both
/// back, and logs status and latency on completion.
pub async fn request_context_middleware(request: Request, next: Next) -> Response {
    let request_id = incoming_or_generated(request.headers(), REQUEST_ID_HEADER, "req");
    let trace_id = incoming_or_generated(request.headers(), TRACE_ID_HEADER, "trace");

    let span = tracing::info_span!(
        "api_request",
        request_id = %request_id,
        trace_id = %trace_id,
        method = %request.method(),
        path = %request.uri().path(),
        query = request.uri().query().unwrap_or_default(),
    );
    let started_at = Instant::now();

    let mut response = next.run(request).instrument(span.clone()).await;

    for (name, value) in [(REQUEST_ID_HEADER, &request_id), (TRACE_ID_HEADER, &trace_id)] {
        if let Ok(value) = HeaderValue::from_str(value) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(name), value);
        }
    }

    tracing::info!(
        parent: &span,
        status = response.status().as_u16(),
        elapsed_ms = started_at.elapsed().as_millis(),
        "request completed"
    );

    response
}

fn incoming_or_generated(headers: &HeaderMap, name: &'static str, prefix: &str) -> String {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| generate_id(prefix))
}

fn generate_id(prefix: &str) -> String {
    let now_ns = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_nanos())
        .unwrap_or_default();
    let counter = REQUEST_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{now_ns:x}-{counter:x}")
}
