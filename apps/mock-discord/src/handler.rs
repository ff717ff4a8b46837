use axum::body::Bytes;
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};

use crate::payload::WebhookPayload;

/// Body Discord answers a successful webhook execution with, byte for byte.
pub const SUCCESS_BODY: &str = r#"{"success": true}"#;

/// Accepts one webhook delivery: 200 with [`SUCCESS_BODY`] for any JSON object,
/// an empty 400 for anything else.
pub async fn receive_webhook(headers: HeaderMap, body: Bytes) -> Response {
    match WebhookPayload::from_request(&headers, &body) {
        Ok(payload) => {
            tracing::info!("Received webhook: {}", payload.content());
            acknowledge().into_response()
        }
        Err(err) => {
            tracing::warn!("Error: {err}");
            err.into_response()
        }
    }
}

/// The 200 reply sent for every accepted delivery.
pub fn acknowledge() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], SUCCESS_BODY)
}
