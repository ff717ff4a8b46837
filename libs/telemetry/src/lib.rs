//! Tracing helpers for the mock webhook endpoint.
//!
//! Every event is written to stderr with a fixed tag in front of it, so a test
//! harness scraping stdout never sees diagnostics and a human reading the
//! combined output can tell mock-server lines apart from the code under test.

mod config;
mod format;
mod tracing_init;

pub use config::{DEFAULT_TAG, LogFormat, TelemetryConfig};
pub use format::TaggedFormat;
pub use tracing_init::{fmt_layer, install};
