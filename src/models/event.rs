use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Inbound API Gateway proxy-integration event.
///
/// Every field is optional at the wire layer on purpose: required-field
/// validation lives in the translator, so a malformed event becomes a 400
/// response instead of a runtime deserialization failure.
///
/// API Gateway delivers headers and query parameters in a single-value and a
/// multi-value representation; both are accepted, and a key may repeat in the
/// multi-value maps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvocationEvent {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub multi_value_query_string_parameters: Option<HashMap<String, Vec<String>>>,
    pub headers: Option<HashMap<String, String>>,
    pub multi_value_headers: Option<HashMap<String, Vec<String>>>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

/// Outbound proxy-integration response.
///
/// Only the multi-value header representation is emitted; API Gateway accepts
/// either, and the multi-value form is lossless for repeated keys. The body
/// and `is_base64_encoded` must agree exactly or the client receives
/// corrupted content, so both are produced together by the translator.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResponse {
    pub status_code: u16,
    pub multi_value_headers: HashMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}
