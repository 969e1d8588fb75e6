//! The `{"statusCode": .., "body": ..}` response envelope.
//!
//! Success bodies carry `success: true` alongside the handler's response
//! fields; error bodies are `{"success": false, "error": "<message>"}`.

use serde::Serialize;

use crate::error::HandlerError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: serde_json::Value,
}

impl Envelope {
    /// Wrap a successful handler response, injecting `success: true`.
    ///
    /// # Panics
    ///
    /// Panics if `response` does not serialize to a JSON object — response
    /// types in `sl_core::responses` are all structs, so this holds by
    /// construction.
    #[must_use]
    pub fn ok<T: Serialize>(response: &T) -> Self {
        let mut body = match serde_json::to_value(response) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => unreachable!("handler responses serialize to JSON objects"),
        };
        body.insert("success".into(), true.into());
        Self {
            status_code: 200,
            body: serde_json::Value::Object(body),
        }
    }

    /// Wrap a handler error with its mapped status.
    #[must_use]
    pub fn error(err: &HandlerError) -> Self {
        Self {
            status_code: err.status_code(),
            body: serde_json::json!({
                "success": false,
                "error": err.to_string(),
            }),
        }
    }

    /// Fold a handler result into an envelope.
    #[must_use]
    pub fn from_result<T: Serialize>(result: &Result<T, HandlerError>) -> Self {
        match result {
            Ok(response) => Self::ok(response),
            Err(err) => Self::error(err),
        }
    }

    /// Serialize the whole envelope to a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
