//! Response definitions
//!
//! Represents replies to clients.

use crate::store::Entry;

/// Outcome class of a reply
///
/// Not sent on the wire; the HTTP front end and tests use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    NotFound,
    Conflict,
    Error,
}

/// A reply to send to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Status code
    pub status: Status,

    /// Reply text
    pub payload: Vec<u8>,
}

impl Response {
    /// Create an OK response
    pub fn ok(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_status(Status::Ok, payload)
    }

    /// Create a NOT_FOUND response
    pub fn not_found(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_status(Status::NotFound, payload)
    }

    /// Create a CONFLICT response
    pub fn conflict(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_status(Status::Conflict, payload)
    }

    /// Create an ERROR response
    pub fn error(payload: impl Into<Vec<u8>>) -> Self {
        Self::with_status(Status::Error, payload)
    }

    fn with_status(status: Status, payload: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            payload: payload.into(),
        }
    }

    /// `{"key": "<key>", "value": "<value>"}`
    pub fn entry(key: &str, value: &[u8]) -> Self {
        Self::ok(format!(
            "{{{}: {}, {}: {}}}",
            quote("key"),
            quote(key),
            quote("value"),
            quote(&String::from_utf8_lossy(value)),
        ))
    }

    /// `["k1":"v1","k2":"v2"]` in the given order, or `Cache is empty`
    pub fn listing(entries: &[Entry]) -> Self {
        if entries.is_empty() {
            return Self::not_found("Cache is empty");
        }

        let pairs: Vec<String> = entries
            .iter()
            .map(|entry| {
                format!(
                    "{}:{}",
                    quote(&entry.key),
                    quote(&String::from_utf8_lossy(&entry.value))
                )
            })
            .collect();

        Self::ok(format!("[{}]", pairs.join(",")))
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Reply text, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.payload
    }
}

/// Quote `s` as a JSON string literal
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}
