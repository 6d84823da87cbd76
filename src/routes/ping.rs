use serde_json::json;

use crate::http::{InternalRequest, InternalResponse};
use crate::models::error::AdapterError;

/// Liveness endpoint used by deployment verification. Requires no body and no
/// query parameters.
///
/// # Errors
///
/// This handler currently does not return errors but uses `Result` to match
/// the registration signature.
pub fn handle(_request: &InternalRequest) -> Result<InternalResponse, AdapterError> {
    Ok(InternalResponse::json(
        200,
        &json!({ "pong": "Hello, World!" }),
    ))
}
