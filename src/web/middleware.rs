//! HTTP middleware

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{Instrument, info, info_span, warn};

/// Wrap each request in a `request` span and log its outcome
///
/// The span carries the method, path and a fresh request id, so anything
/// logged while the handler runs (lookup failures included) is correlated
/// with the completion event emitted here.
pub async fn request_logging_middleware(
    method: Method,
    uri: Uri,
    request: Request,
    next: Next,
) -> Response {
    let request_id = uuid::Uuid::new_v4();
    let span = info_span!(
        "request",
        method = %method,
        path = %uri.path(),
        request_id = %request_id,
    );

    async move {
        let start = Instant::now();
        let response = next.run(request).await;
        let status = response.status();
        let duration_ms = start.elapsed().as_millis();

        if status.is_client_error() || status.is_server_error() {
            warn!(status = status.as_u16(), duration_ms, "request failed");
        } else {
            info!(status = status.as_u16(), duration_ms, "request served");
        }

        response
    }
    .instrument(span)
    .await
}
