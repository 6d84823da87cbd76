use serde_json::json;

use crate::http::{InternalRequest, InternalResponse};
use crate::models::error::AdapterError;

/// Default name to use when no caller information is available
const DEFAULT_NAME: &str = "there";

/// Personalized greeting.
///
/// `GET /greet?name=Jane` answers `{"greeting": "Hello, Jane!"}`; an absent
/// or empty `name` falls back to "there".
///
/// # Errors
///
/// This handler currently does not return errors but uses `Result` to match
/// the registration signature.
pub fn handle(request: &InternalRequest) -> Result<InternalResponse, AdapterError> {
    let name = request
        .query_param("name")
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_NAME);
    Ok(InternalResponse::json(
        200,
        &json!({ "greeting": format!("Hello, {name}!") }),
    ))
}
