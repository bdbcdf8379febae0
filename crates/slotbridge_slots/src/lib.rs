// --- File: crates/slotbridge_slots/src/lib.rs ---
// Declare modules within this crate
pub mod booking;
pub mod dates;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod models;
pub mod routes;
pub mod service;
pub mod validators;

pub use booking::BookingCoordinator;
pub use dates::WeekKey;
pub use error::{SlotsError, UpstreamError};
pub use routes::routes;
pub use service::{HttpSlotService, SlotService};
