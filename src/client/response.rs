//! Shared interpretation of backend responses.
//!
//! Every endpoint maps status codes the same way; only the resource noun and the action
//! phrase of the originating [`ApiRequest`] vary.

use reqwest::StatusCode;
use serde_json::Value;

use crate::{client::request::ApiRequest, error::api::ApiError};

const MESSAGE_FIELDS: [&str; 3] = ["message", "error", "title"];

/// Interpret a complete response: classify the status, then parse a success body as JSON.
///
/// # Returns
/// - `Ok(Value)` - Parsed body of a 2xx response, `Value::Null` for an empty body
/// - `Err(ApiError)` - Classified failure, or `ApiError::Decode` for a malformed success body
pub fn interpret_response(
    status: StatusCode,
    body: &str,
    request: &ApiRequest,
) -> Result<Value, ApiError> {
    check_status(status, body, request)?;

    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(ApiError::Decode)
}

/// Classify a response status without looking at a success body.
pub fn check_status(status: StatusCode, body: &str, request: &ApiRequest) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    let err = match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound {
            resource: request.resource_name().to_string(),
        },
        StatusCode::BAD_REQUEST => ApiError::BadRequest(
            server_message(body).unwrap_or_else(|| request.default_failure_message()),
        ),
        _ => ApiError::Failed(
            server_message(body).unwrap_or_else(|| request.default_failure_message()),
        ),
    };

    Err(err)
}

/// Extract the human-readable message from an error body.
///
/// A JSON object yields its `message`, `error` or `title` string field, a JSON string yields
/// itself, and anything that is not JSON is returned as trimmed text.
pub fn server_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(fields)) => MESSAGE_FIELDS
            .iter()
            .find_map(|field| fields.get(*field).and_then(Value::as_str))
            .map(str::to_string),
        Ok(Value::String(message)) => Some(message),
        Ok(_) => None,
        Err(_) => Some(trimmed.to_string()),
    };

    message.filter(|message| !message.trim().is_empty())
}
