// --- File: crates/slotbridge_slots/src/booking.rs ---
use chrono::{NaiveDate, NaiveDateTime, Utc};
use slotbridge_common::ValidationErrors;
use std::sync::Arc;
use tracing::{info, warn};

use crate::dates::WeekKey;
use crate::error::SlotsError;
use crate::logic::compute_available_slots;
use crate::models::{
    AvailabilityQuery, AvailableSlot, BookSlotRequest, Booking, BookingConfirmation,
    TakeSlotOutcome, TakeSlotRequest,
};
use crate::service::SlotService;
use crate::validators::{availability_rules, booking_rules};

type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Runs availability lookups and bookings against a [`SlotService`].
///
/// Nothing is cached: every booking recomputes the week's slots from a fresh
/// upstream fetch before asking the service to take the slot. The check and
/// the take are two separate upstream calls, so a slot can still be taken by
/// someone else in between; the upstream service has the final word.
#[derive(Clone)]
pub struct BookingCoordinator {
    slot_service: Arc<dyn SlotService>,
    clock: Clock,
}

impl BookingCoordinator {
    pub fn new(slot_service: Arc<dyn SlotService>) -> Self {
        Self {
            slot_service,
            clock: Arc::new(|| Utc::now().naive_utc()),
        }
    }

    /// Replaces the clock used to decide whether a start time is in the future.
    pub fn with_clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> NaiveDateTime + Send + Sync + 'static,
    {
        self.clock = Arc::new(clock);
        self
    }

    /// All available slots of the week starting on `monday_date`.
    pub async fn available_slots_for_week(
        &self,
        monday_date: NaiveDate,
    ) -> Result<Vec<AvailableSlot>, SlotsError> {
        availability_rules().validate(&AvailabilityQuery { monday_date })?;

        let week = WeekKey::containing(monday_date);
        let weekly = self.slot_service.get_weekly_availability(week).await?;
        compute_available_slots(&weekly, week.monday())
    }

    /// Validates the request, confirms the slot is still offered, then takes it.
    pub async fn book_slot(
        &self,
        request: BookSlotRequest,
    ) -> Result<BookingConfirmation, SlotsError> {
        let now = (self.clock)();
        booking_rules(now).validate(&request)?;
        let booking = Booking::from_request(request).ok_or_else(|| {
            ValidationErrors::single("body", "Booking request is incomplete.")
        })?;

        let week = WeekKey::containing(booking.start.date());
        let slots = self.available_slots_for_week(week.monday()).await?;
        if !slots.iter().any(|slot| booking.matches(slot)) {
            info!(
                "Requested slot {} - {} is not available in week {}",
                booking.start, booking.end, week
            );
            return Err(SlotsError::SlotUnavailable);
        }

        match self
            .slot_service
            .take_slot(TakeSlotRequest::from(&booking))
            .await?
        {
            TakeSlotOutcome::Taken => {
                info!(
                    "Booked slot {} - {} at facility {}",
                    booking.start, booking.end, booking.facility_id
                );
                Ok(BookingConfirmation {
                    facility_id: booking.facility_id,
                    start: booking.start,
                    end: booking.end,
                })
            }
            TakeSlotOutcome::Declined(reason) => {
                warn!(
                    "Slot service declined booking {} - {}: {}",
                    booking.start, booking.end, reason
                );
                Err(SlotsError::Declined(reason))
            }
        }
    }
}
