//! Parsing of webhook deliveries into a loosely typed JSON object.

use axum::http::HeaderMap;
use axum::http::header::CONTENT_LENGTH;
use serde_json::{Map, Value};

use crate::error::ReceiveError;

/// Logged in place of `content` when the field is absent or not a string.
pub const MISSING_CONTENT: &str = "N/A";

/// A delivered JSON object. No schema is enforced; callers read fields through
/// the defaulting accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebhookPayload(Map<String, Value>);

impl WebhookPayload {
    /// Checks the body against the declared `Content-Length`, then parses it.
    pub fn from_request(headers: &HeaderMap, body: &[u8]) -> Result<Self, ReceiveError> {
        let declared = declared_length(headers)?;
        if declared != body.len() {
            return Err(ReceiveError::LengthMismatch {
                declared,
                actual: body.len(),
            });
        }
        Self::parse(body)
    }

    /// Decodes `body` as UTF-8 and parses it as a JSON object.
    pub fn parse(body: &[u8]) -> Result<Self, ReceiveError> {
        let text = std::str::from_utf8(body)?;
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self(map)),
            other => Err(ReceiveError::NotAnObject(kind(&other))),
        }
    }

    /// String value of `key`, or `default` when the key is missing or holds
    /// anything other than a string.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).and_then(Value::as_str).unwrap_or(default)
    }

    pub fn content(&self) -> &str {
        self.str_or("content", MISSING_CONTENT)
    }
}

fn declared_length(headers: &HeaderMap) -> Result<usize, ReceiveError> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or(ReceiveError::MissingLength)?;
    let raw = String::from_utf8_lossy(value.as_bytes());
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ReceiveError::InvalidLength(raw.into_owned()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
