// --- File: crates/slotbridge_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod middleware; // Request logging
pub mod validation; // Declarative rule sets

// Re-export error types and utilities for easier access
pub use error::{conflict, internal_error, not_found, ApiError, HttpStatusCode};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, panic_response};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level};

pub use middleware::request_logging_middleware;

pub use validation::{is_not_blank, FieldError, RuleSet, ValidationErrors};

// This crate provides functionality shared by the service crates:
// error handling, validation, logging and HTTP utilities.
