/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Use these helpers to ensure all error messages are consistent, explicit, and include a code and context.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

use crate::game::error::GameError;

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "MISSING_LEVER").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. session id, save name).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": { "code": code, "message": message, "context": context.unwrap_or("") }
    })
    .to_string()
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "error": { "code": code, "message": message, "context": context.unwrap_or("") }
    }))
}

/// HTTP status for an engine error.
pub fn status_for(err: &GameError) -> StatusCode {
    match err {
        GameError::Format(_) | GameError::InvalidSaveName(_) | GameError::UnknownDirection(_) => {
            StatusCode::BAD_REQUEST
        }
        GameError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
        GameError::MissingLever(_) | GameError::BlockedGate(_) => StatusCode::CONFLICT,
        GameError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// HTTP error response for an engine error.
pub fn game_error_response(err: &GameError, context: Option<&str>) -> HttpResponse {
    http_error_response(err.code(), &err.to_string(), context, status_for(err))
}
