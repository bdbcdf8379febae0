// --- File: crates/slotbridge_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;
use tracing::error;

use crate::error::{ApiError, HttpStatusCode};

// Include the client module
pub mod client;

/// Body returned for panics caught at the router boundary.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Validation failures become `400 {"errors": [...]}`, everything else
/// `{status} {"error": message}`.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = match &self {
            ApiError::ValidationError(errors) => Json(json!({ "errors": errors.errors() })),
            other => Json(json!({ "error": other.public_message() })),
        };

        (status_code, body).into_response()
    }
}

/// Turns a caught handler panic into a JSON 500.
///
/// Meant for `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": UNEXPECTED_ERROR_MESSAGE })),
    )
        .into_response()
}
