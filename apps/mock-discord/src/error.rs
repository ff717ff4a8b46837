use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Why a webhook delivery was rejected. Every variant answers with a bare 400.
#[derive(Debug, thiserror::Error)]
pub enum ReceiveError {
    #[error("missing Content-Length header")]
    MissingLength,
    #[error("invalid Content-Length header {0:?}")]
    InvalidLength(String),
    #[error("expected {declared} body bytes, read {actual}")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error("body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

impl IntoResponse for ReceiveError {
    fn into_response(self) -> Response {
        StatusCode::BAD_REQUEST.into_response()
    }
}
