//! Internal HTTP representation consumed by the routing table.
//!
//! The translator produces an [`InternalRequest`] from the platform event and
//! turns the [`InternalResponse`] a route handler returns back into the
//! platform's wire shape. Header keys are lowercased on the way in; value
//! order within a repeated key is preserved in both directions.

use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Standard HTTP verbs accepted by the router.
///
/// Parsed case-insensitively from the event's `httpMethod`; anything else is
/// rejected by the translator as a malformed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Trace,
}

impl Method {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "HEAD" => Some(Self::Head),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            "OPTIONS" => Some(Self::Options),
            "TRACE" => Some(Self::Trace),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Options => "OPTIONS",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inbound request after translation: body already decoded, header keys
/// lowercased, repeated keys kept in order.
#[derive(Debug, Clone)]
pub struct InternalRequest {
    pub method: Method,
    pub path: String,
    pub query: HashMap<String, Vec<String>>,
    pub headers: HashMap<String, Vec<String>>,
    pub body: Vec<u8>,
}

impl InternalRequest {
    /// First value for a query parameter, if present.
    #[must_use]
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// First value for a header. `name` must already be lowercase.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// One outbound response before translation back to the wire shape.
#[derive(Debug, Clone)]
pub struct InternalResponse {
    pub status: u16,
    pub headers: HashMap<String, Vec<String>>,
    pub body: Vec<u8>,
}

impl InternalResponse {
    /// Response with a raw byte body and an explicit content type.
    #[must_use]
    pub fn bytes(status: u16, content_type: &str, body: Vec<u8>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), vec![content_type.to_string()]);
        Self {
            status,
            headers,
            body,
        }
    }

    /// JSON response. Serialization of a `Value` cannot fail, so a failure
    /// degrades to an empty body rather than an error.
    #[must_use]
    pub fn json(status: u16, value: &Value) -> Self {
        Self::bytes(
            status,
            "application/json",
            serde_json::to_vec(value).unwrap_or_default(),
        )
    }

    /// Response with no body and no headers.
    #[must_use]
    pub fn empty(status: u16) -> Self {
        Self {
            status,
            headers: HashMap::new(),
            body: Vec::new(),
        }
    }

    /// Appends a header value, preserving any values already present under
    /// the same key. `name` is lowercased.
    pub fn append_header(&mut self, name: &str, value: String) {
        self.headers
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value);
    }

    /// First `content-type` value, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get("content-type")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
