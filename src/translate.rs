//! Bidirectional translation between the platform's proxy event shape and the
//! internal HTTP representation.
//!
//! Both directions are pure: no I/O, no state, nothing beyond allocation.
//! Validation of required event fields lives here so the entry point can map
//! failures to 400 responses.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use std::collections::HashMap;

use crate::http::{InternalRequest, InternalResponse, Method};
use crate::models::error::AdapterError;
use crate::models::event::{InvocationEvent, InvocationResponse};

/// Converts a proxy event into an [`InternalRequest`].
///
/// Header keys are lowercased; query keys are taken verbatim. When both the
/// single- and multi-value representation of a map are present, the
/// multi-value entries win per key (API Gateway guarantees they are a
/// superset) and single-value entries only fill in missing keys.
///
/// # Errors
///
/// Returns [`AdapterError::MalformedEvent`] when `httpMethod` or `path` is
/// absent, the method is not a standard verb, or a body declared as base64
/// does not decode.
pub fn to_internal_request(event: &InvocationEvent) -> Result<InternalRequest, AdapterError> {
    let method_name = event
        .http_method
        .as_deref()
        .ok_or_else(|| AdapterError::MalformedEvent("event is missing httpMethod".to_string()))?;
    let method = Method::parse(method_name).ok_or_else(|| {
        AdapterError::MalformedEvent(format!("unrecognized HTTP method: {method_name}"))
    })?;
    let path = event
        .path
        .clone()
        .ok_or_else(|| AdapterError::MalformedEvent("event is missing path".to_string()))?;

    let query = merge_value_maps(
        event.multi_value_query_string_parameters.as_ref(),
        event.query_string_parameters.as_ref(),
        false,
    );
    let headers = merge_value_maps(
        event.multi_value_headers.as_ref(),
        event.headers.as_ref(),
        true,
    );
    let body = decode_body(event)?;

    Ok(InternalRequest {
        method,
        path,
        query,
        headers,
        body,
    })
}

/// Converts an [`InternalResponse`] into the outbound wire shape.
///
/// Encoding decision, applied deterministically: the body passes through as
/// text iff the response content type is textual (see [`is_textual`]) and the
/// bytes are valid UTF-8; otherwise the body is base64-encoded and
/// `isBase64Encoded` is set. An empty body is emitted as no body with the
/// flag cleared.
#[must_use]
pub fn to_invocation_response(internal: InternalResponse) -> InvocationResponse {
    let InternalResponse {
        status,
        headers,
        body,
    } = internal;

    if body.is_empty() {
        return InvocationResponse {
            status_code: status,
            multi_value_headers: headers,
            body: None,
            is_base64_encoded: false,
        };
    }

    let textual_type = headers
        .get("content-type")
        .and_then(|values| values.first())
        .is_none_or(|content_type| is_textual(content_type));

    let (body, is_base64_encoded) = if textual_type {
        match String::from_utf8(body) {
            Ok(text) => (text, false),
            // Declared textual but not valid UTF-8: encode rather than corrupt
            Err(invalid) => (STANDARD.encode(invalid.into_bytes()), true),
        }
    } else {
        (STANDARD.encode(body), true)
    };

    InvocationResponse {
        status_code: status,
        multi_value_headers: headers,
        body: Some(body),
        is_base64_encoded,
    }
}

/// Whether a content type carries text the platform can pass through without
/// base64. Parameters after `;` are ignored; matching is case-insensitive.
fn is_textual(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or(content_type)
        .trim()
        .to_ascii_lowercase();
    essence.starts_with("text/")
        || matches!(
            essence.as_str(),
            "application/json"
                | "application/xml"
                | "application/javascript"
                | "application/x-www-form-urlencoded"
        )
        || essence.ends_with("+json")
        || essence.ends_with("+xml")
}

fn decode_body(event: &InvocationEvent) -> Result<Vec<u8>, AdapterError> {
    match &event.body {
        None => Ok(Vec::new()),
        Some(text) if event.is_base64_encoded => STANDARD.decode(text).map_err(|e| {
            AdapterError::MalformedEvent(format!("body is declared base64 but does not decode: {e}"))
        }),
        Some(text) => Ok(text.clone().into_bytes()),
    }
}

/// Flattens the two event map representations into one multi-value map,
/// preserving value order within each key.
fn merge_value_maps(
    multi: Option<&HashMap<String, Vec<String>>>,
    single: Option<&HashMap<String, String>>,
    fold_keys: bool,
) -> HashMap<String, Vec<String>> {
    let fold = |key: &str| {
        if fold_keys {
            key.to_ascii_lowercase()
        } else {
            key.to_string()
        }
    };

    let mut merged: HashMap<String, Vec<String>> = HashMap::new();
    if let Some(multi) = multi {
        for (key, values) in multi {
            merged.entry(fold(key)).or_default().extend(values.clone());
        }
    }
    if let Some(single) = single {
        for (key, value) in single {
            merged
                .entry(fold(key))
                .or_insert_with(|| vec![value.clone()]);
        }
    }
    merged
}
