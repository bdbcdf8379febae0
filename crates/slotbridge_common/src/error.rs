// --- File: crates/slotbridge_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::validation::ValidationErrors;

/// The error type surfaced at the HTTP boundary.
///
/// Domain crates implement `From<TheirError> for ApiError` so that handlers can
/// return `Result<_, ApiError>` and let the status mapping live in one place.
#[derive(Error, Debug)]
pub enum ApiError {
    /// One or more inbound fields failed validation
    #[error("{0}")]
    ValidationError(ValidationErrors),

    /// The requested resource does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The request conflicts with the current state of a resource
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Anything else. The message must be safe to show to the caller.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApiError {
    /// The message rendered into the `error` field of the response body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::ValidationError(errors) => errors.to_string(),
            ApiError::NotFoundError(message)
            | ApiError::ConflictError(message)
            | ApiError::InternalError(message) => message.clone(),
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ApiError {
    fn status_code(&self) -> u16 {
        match self {
            ApiError::ValidationError(_) => 400,
            ApiError::NotFoundError(_) => 404,
            ApiError::ConflictError(_) => 409,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::ValidationError(errors)
    }
}

// Utility functions for error handling
pub fn not_found<T: fmt::Display>(message: T) -> ApiError {
    ApiError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ApiError {
    ApiError::ConflictError(message.to_string())
}

pub fn internal_error<T: fmt::Display>(message: T) -> ApiError {
    ApiError::InternalError(message.to_string())
}
