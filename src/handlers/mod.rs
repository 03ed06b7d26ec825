pub mod fallback;
pub mod health;
pub mod login;
pub mod register;
pub mod results;
pub mod survey;

use crate::core::error::ApiError;
use serde_json::Value;

/// Shared fallback for routes hit with an unsupported HTTP method.
///
/// Runs before any body parsing or gateway call.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Parse a raw request body as JSON.
pub(crate) fn parse_json(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|_| ApiError::InvalidJson)
}

/// Extract a required string field. Empty strings count as missing, matching
/// the truthiness checks of the original API.
pub(crate) fn non_empty_str<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
