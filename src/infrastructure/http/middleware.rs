//! HTTP Middleware
//!
//! Status-code logging. Error responses on this service carry empty bodies,
//! so the status line is the only wire-visible signal; this middleware makes
//! sure each 4xx/5xx also lands in the log with its method and path.

use axum::{extract::Request, middleware::Next, response::Response};

pub async fn status_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}
