// File: crates/slotbridge_slots/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{AvailabilityQuery, AvailableSlot, BookSlotRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_available_slots_handler,
        crate::handlers::book_slot_handler
    ),
    components(schemas(AvailabilityQuery, AvailableSlot, BookSlotRequest)),
    tags(
        (name = "Slots", description = "Weekly slot availability and booking")
    ),
    servers(
        (url = "/api", description = "Slot booking API")
    )
)]
pub struct SlotsApiDoc;
