//! Mapping of transport failures and HTTP statuses into [`ApiError`].

use reqwest::StatusCode;
use serde::Deserialize;

use super::types::ApiError;

/// Structured error body some endpoints return, e.g. `{"error": "Unauthorized"}`.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Categorizes a `reqwest::Error` raised before a response was received.
pub fn categorize_transport(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_connect() {
        ApiError::Connect(error.to_string())
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// Categorizes a non-success HTTP status, pulling the structured `error`
/// string out of the body when one is present.
pub fn categorize_status(status: StatusCode, body: &str) -> ApiError {
    if status == StatusCode::NOT_FOUND {
        return ApiError::NotFound;
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.error);
    ApiError::Status { status, message }
}
