// --- File: crates/slotbridge_slots/src/error.rs ---
use slotbridge_common::{conflict, internal_error, not_found, ApiError, ValidationErrors};
use thiserror::Error;

pub const FETCH_WEEK_OPERATION: &str = "fetching weekly availability";
pub const TAKE_SLOT_OPERATION: &str = "taking slot";
pub const COMPUTE_SLOTS_OPERATION: &str = "computing available slots";

pub const SLOT_NOT_FOUND_MESSAGE: &str = "No available slot found for the requested time.";

/// Message shown to callers in place of upstream diagnostics.
pub fn generic_failure_message(operation: &str) -> String {
    format!("An unexpected error occurred while {operation}. Please try again later.")
}

/// Failures talking to the upstream slot service.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Error {operation}. Status code: {status}, Reason: {reason}")]
    Status {
        operation: &'static str,
        status: u16,
        reason: String,
    },
    #[error("Request failed while {operation}: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Could not decode response while {operation}: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl UpstreamError {
    pub fn operation(&self) -> &'static str {
        match self {
            UpstreamError::Status { operation, .. }
            | UpstreamError::Transport { operation, .. }
            | UpstreamError::Decode { operation, .. } => operation,
        }
    }
}

#[derive(Error, Debug)]
pub enum SlotsError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
    #[error("{}", SLOT_NOT_FOUND_MESSAGE)]
    SlotUnavailable,
    /// The slot service accepted the call but refused the booking.
    #[error("Slot service declined the booking: {0}")]
    Declined(String),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl From<SlotsError> for ApiError {
    fn from(err: SlotsError) -> Self {
        match err {
            SlotsError::Validation(errors) => ApiError::ValidationError(errors),
            SlotsError::SlotUnavailable => not_found(SLOT_NOT_FOUND_MESSAGE),
            SlotsError::Declined(reason) => conflict(reason),
            SlotsError::Upstream(e) => internal_error(generic_failure_message(e.operation())),
            SlotsError::Calculation(_) => {
                internal_error(generic_failure_message(COMPUTE_SLOTS_OPERATION))
            }
        }
    }
}
