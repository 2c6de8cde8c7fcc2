//! Response helpers and error mapping

use axum::{
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::AppError;

pub const JSON_UTF8: &str = "application/json; charset=utf-8";
pub const TEXT_PLAIN: &str = "text/plain";

/// 200 with a pre-encoded JSON body
pub fn json_bytes(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(JSON_UTF8))],
        body,
    )
        .into_response()
}

/// 200 with a plain-text body
pub fn plain_text(body: String) -> Response {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN))],
        body,
    )
        .into_response()
}

/// Request errors are reported to the caller only, as a 500 with the
/// error message in a plain-text body
pub fn handle_error(error: AppError) -> Response {
    error!("request failed: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN))],
        error.to_string(),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        handle_error(self)
    }
}
