// --- File: crates/slotbridge_slots/src/routes.rs ---

use crate::booking::BookingCoordinator;
use crate::handlers::{book_slot_handler, get_available_slots_handler, SlotsState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates a router containing the slot availability and booking routes.
/// Paths are relative; the backend nests them under `/api`.
pub fn routes(coordinator: Arc<BookingCoordinator>) -> Router {
    let state = Arc::new(SlotsState::new(coordinator));

    Router::new()
        .route("/slots/available", get(get_available_slots_handler))
        .route("/slots/book", post(book_slot_handler))
        .with_state(state)
}
