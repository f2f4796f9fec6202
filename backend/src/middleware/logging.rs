use axum::{
    body::{to_bytes, Body, Bytes},
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;

struct ErrorEvent<'a> {
    status: u16,
    method: &'a str,
    path: &'a str,
    request_id: &'a str,
    latency_ms: u64,
}

/// Logs every 4xx/5xx response with a body preview; the body is buffered and
/// passed through unchanged.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let event = ErrorEvent {
        status: status.as_u16(),
        method: &method,
        path: &path,
        request_id: &request_id,
        latency_ms: start.elapsed().as_millis() as u64,
    };
    let (mut parts, body) = response.into_parts();
    match to_bytes(body, MAX_BUFFERED_BODY_BYTES).await {
        Ok(bytes) => {
            event.record(&preview(&bytes), None);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            event.record("", Some(&err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

fn preview(bytes: &Bytes) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl ErrorEvent<'_> {
    fn record(&self, body: &str, body_error: Option<&AxumError>) {
        let ErrorEvent {
            status,
            method,
            path,
            request_id,
            latency_ms,
        } = *self;
        match (status >= 500, body_error) {
            (true, Some(err)) => tracing::error!(status, method, path, request_id, latency_ms, error = ?err, "Failed to read error response body"),
            (false, Some(err)) => tracing::warn!(status, method, path, request_id, latency_ms, error = ?err, "Failed to read error response body"),
            (true, None) => tracing::error!(status, method, path, request_id, latency_ms, body, "Request completed with error status"),
            (false, None) => tracing::warn!(status, method, path, request_id, latency_ms, body, "Request completed with error status"),
        }
    }
}
