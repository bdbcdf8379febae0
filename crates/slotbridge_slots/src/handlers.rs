// File: crates/slotbridge_slots/src/handlers.rs
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    response::Json,
};
use slotbridge_common::{ApiError, ValidationErrors};
use std::sync::Arc;
use tracing::{info, warn};

use crate::booking::BookingCoordinator;
use crate::error::SlotsError;
use crate::models::{AvailabilityQuery, AvailableSlot, BookSlotRequest, BookingConfirmation};

// Shared state for the slot handlers
#[derive(Clone)]
pub struct SlotsState {
    pub coordinator: Arc<BookingCoordinator>,
}

impl SlotsState {
    pub fn new(coordinator: Arc<BookingCoordinator>) -> Self {
        Self { coordinator }
    }
}

fn log_failure(operation: &str, err: &SlotsError) {
    match err {
        SlotsError::Validation(errors) => {
            info!(
                "{} rejected with {} errors: {}",
                operation,
                errors.len(),
                errors.summary()
            )
        }
        SlotsError::SlotUnavailable | SlotsError::Declined(_) => {
            info!("{} failed: {}", operation, err)
        }
        // Upstream failures are logged with full details by the client
        SlotsError::Upstream(_) | SlotsError::Calculation(_) => {
            warn!("{} failed: {}", operation, err)
        }
    }
}

/// Handler returning every available slot of the week starting on `MondayDate`.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots/available", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Available slots of the week", body = [AvailableSlot]),
        (status = 400, description = "MondayDate missing, malformed or not a Monday"),
        (status = 500, description = "The slot service could not be reached or answered with an error")
    ),
    tag = "Slots"
))]
pub async fn get_available_slots_handler(
    State(state): State<Arc<SlotsState>>,
    query: Result<Query<AvailabilityQuery>, QueryRejection>,
) -> Result<Json<Vec<AvailableSlot>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        info!("Rejected availability query: {}", rejection.body_text());
        ValidationErrors::single(
            "MondayDate",
            "MondayDate is required and must be a date in YYYY-MM-DD format.",
        )
    })?;

    let slots = state
        .coordinator
        .available_slots_for_week(query.monday_date)
        .await
        .inspect_err(|e| log_failure("Availability lookup", e))?;

    Ok(Json(slots))
}

/// Handler booking one of the slots previously returned by the availability endpoint.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/slots/book", // Path relative to /api
    request_body = BookSlotRequest,
    responses(
        (status = 200, description = "Slot booked", body = String, example = json!("Slot booked successfully.")),
        (status = 400, description = "One or more fields failed validation"),
        (status = 404, description = "The requested slot is not available"),
        (status = 409, description = "The slot service declined the booking"),
        (status = 500, description = "The slot service could not be reached or answered with an error")
    ),
    tag = "Slots"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<SlotsState>>,
    payload: Result<Json<BookSlotRequest>, JsonRejection>,
) -> Result<Json<&'static str>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        info!("Rejected booking body: {}", rejection.body_text());
        ValidationErrors::single("body", rejection.body_text())
    })?;

    state
        .coordinator
        .book_slot(request)
        .await
        .inspect_err(|e| log_failure("Booking", e))?;

    Ok(Json(BookingConfirmation::MESSAGE))
}
