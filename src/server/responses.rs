//! The single serialization point for route outcomes.
//!
//! Historically each route shaped its own error body; they are unified here
//! behind the tagged error type, with every route keeping its status mapping.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde_json::json;
use tracing::{error, warn};

use crate::constants::messages;
use crate::error::AppError;

/// Maps a failed outcome to its HTTP response. Rate limiting gets the fixed
/// message body the UI matches on; everything else carries the error text.
pub fn error_response(err: &AppError) -> HttpResponse {
    if err.is_rate_limited() {
        warn!("Upstream throttled: {err}");
        return HttpResponse::ServiceUnavailable().json(json!({
            "error": messages::RATE_LIMITED,
        }));
    }

    let status = StatusCode::from_u16(err.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        error!("Request failed: {err}");
    } else {
        warn!("Request rejected: {err}");
    }
    HttpResponse::build(status).json(json!({ "error": err.to_string() }))
}

/// The soft-fail envelope used by listing routes: a successful-looking empty
/// response instead of a propagated upstream error, so list pages keep
/// rendering on partial upstream failure.
pub fn soft_empty(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "data": [],
        "success": true,
        "message": message,
    }))
}

/// Parses an integer path id, rejecting anything else with a 400-mapped
/// validation error.
pub fn parse_id(raw: &str, name: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::validation(format!("{name} must be an integer")))
}
