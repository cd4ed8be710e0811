//! Request logging for the gateway HTTP API
//!
//! Each request is logged once, after the handler ran, with the gateway
//! operation it addressed and the error kind of a failed envelope.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::core::error::ErrorKind;

/// Gateway operation addressed by a request path
///
/// `/` is the heartbeat; every other route is named after its operation.
pub fn operation_name(path: &str) -> &str {
    match path.trim_matches('/') {
        "" => "heartbeat",
        name => name,
    }
}

/// Request logging middleware
///
/// Successful requests are logged at INFO. Failed gateway operations are
/// logged at WARN when the caller is at fault (validation, unbound
/// session, binding, missing file) and at ERROR otherwise.
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let operation = operation_name(request.uri().path()).to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match response.extensions().get::<ErrorKind>().copied() {
        None if response.status().is_success() => tracing::info!(
            %method,
            %operation,
            status,
            duration_ms,
            "Operation completed"
        ),
        Some(ErrorKind::Internal) | None => tracing::error!(
            %method,
            %operation,
            status,
            duration_ms,
            "Operation failed"
        ),
        Some(kind) => tracing::warn!(
            %method,
            %operation,
            status,
            error_kind = kind.as_str(),
            duration_ms,
            "Operation rejected"
        ),
    }

    response
}
