use crate::http::{InternalRequest, InternalResponse};
use crate::models::error::AdapterError;

/// Content type assumed when the request declares none
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Prefix of request headers reflected back onto the response, with their
/// repeated values kept in order
const REFLECTED_PREFIX: &str = "x-echo-";

/// Echoes the request body back verbatim under the request's own content
/// type, so binary payloads make the full base64 round trip. Request headers
/// prefixed `x-echo-` are copied onto the response.
///
/// # Errors
///
/// This handler currently does not return errors but uses `Result` to match
/// the registration signature.
pub fn handle(request: &InternalRequest) -> Result<InternalResponse, AdapterError> {
    let content_type = request
        .header("content-type")
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let mut response = InternalResponse::bytes(200, &content_type, request.body.clone());
    for (name, values) in &request.headers {
        if name.starts_with(REFLECTED_PREFIX) {
            response.headers.insert(name.clone(), values.clone());
        }
    }
    Ok(response)
}
