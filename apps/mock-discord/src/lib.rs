//! Mock Discord webhook endpoint for integration tests.
//!
//! ```text
//! POST <any path> with a JSON object body -> 200 {"success": true}
//! anything unparseable                    -> 400, empty body
//! ```
//!
//! Receipt of each delivery is logged through `tracing`; the binary installs
//! a subscriber that writes tagged lines to stderr only.

use axum::{Router, extract::DefaultBodyLimit, middleware, routing::post};

pub mod access_log;
pub mod error;
pub mod handler;
pub mod payload;
mod server;

pub use error::ReceiveError;
pub use handler::{SUCCESS_BODY, acknowledge, receive_webhook};
pub use payload::{MISSING_CONTENT, WebhookPayload};
pub use server::{MockServer, bind, serve};

pub const DEFAULT_PORT: u16 = 8080;

/// POST on any path reaches [`receive_webhook`]; other methods get 405.
/// Bodies are read in full whatever their declared length.
pub fn router() -> Router {
    Router::new()
        .route("/", post(receive_webhook))
        .route("/{*path}", post(receive_webhook))
        .layer(DefaultBodyLimit::disable())
        .layer(middleware::from_fn(access_log::log_request))
}
