// --- File: crates/slotbridge_slots/src/logic.rs ---
use chrono::{Days, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use crate::error::SlotsError;
use crate::models::{AvailableSlot, BusySlot, WeeklyAvailability, WorkPeriod};

/// Longest slot the upstream may ask for: one whole day.
pub const MAX_SLOT_DURATION_MINUTES: i64 = 24 * 60;

/// Expands one day's working hours into bookable slots.
///
/// Candidates start at `start_hour` and advance by `slot_duration` while the
/// start is not after `end_hour`. A candidate is kept when its hour, counted
/// from `day_start`, is outside lunch and inside working hours, and it is not
/// fully inside a busy interval. Only whole containment blocks a candidate; partial overlaps do not.
///
/// `slot_duration` must be positive. Times that cannot be represented end the
/// day early instead of overflowing.
pub fn generate_slots_for_day(
    facility_id: Uuid,
    day_start: NaiveDateTime,
    work_period: &WorkPeriod,
    busy_slots: &[BusySlot],
    slot_duration: Duration,
) -> Vec<AvailableSlot> {
    let mut slots = Vec::new();
    if slot_duration <= Duration::zero() {
        return slots;
    }

    let offset =
        |hours: i64| Duration::try_hours(hours).and_then(|d| day_start.checked_add_signed(d));
    let (Some(mut cursor), Some(last_start)) =
        (offset(work_period.start_hour), offset(work_period.end_hour))
    else {
        return slots;
    };

    while cursor <= last_start {
        let Some(slot_end) = cursor.checked_add_signed(slot_duration) else {
            break;
        };
        if work_period.is_bookable_hour((cursor - day_start).num_hours()) {
            let blocked = busy_slots.iter().any(|busy| busy.covers(cursor, slot_end));
            if !blocked {
                slots.push(AvailableSlot {
                    facility_id,
                    start: cursor,
                    end: slot_end,
                });
            }
        }
        cursor = slot_end;
    }

    slots
}

/// Computes every available slot of a week, Monday first and in time order.
///
/// `week_start` is the Monday the weekly availability belongs to; day `n`
/// of the week is anchored at midnight of `week_start + n` days. Days the
/// upstream reports as `null` contribute nothing.
pub fn compute_available_slots(
    weekly: &WeeklyAvailability,
    week_start: NaiveDate,
) -> Result<Vec<AvailableSlot>, SlotsError> {
    let slot_duration = match weekly.slot_duration_minutes {
        minutes @ 1..=MAX_SLOT_DURATION_MINUTES => Duration::minutes(minutes),
        minutes => {
            return Err(SlotsError::Calculation(format!(
                "Slot duration must be between 1 and {MAX_SLOT_DURATION_MINUTES} minutes, got {minutes}"
            )))
        }
    };
    let facility_id = weekly.facility.facility_id;

    let mut slots = Vec::new();
    for (offset, (weekday, day)) in (0u64..).zip(weekly.days()) {
        let Some(day) = day else {
            debug!("No availability reported for {:?}", weekday);
            continue;
        };
        if !day.work_period.is_well_formed() {
            return Err(SlotsError::Calculation(format!(
                "Invalid work period for {:?}: {:?}",
                weekday, day.work_period
            )));
        }
        let date = week_start.checked_add_days(Days::new(offset)).ok_or_else(|| {
            SlotsError::Calculation(format!("Date out of range: {week_start} + {offset} days"))
        })?;
        let day_start = date.and_time(NaiveTime::MIN);
        slots.extend(generate_slots_for_day(
            facility_id,
            day_start,
            &day.work_period,
            day.busy_slots(),
            slot_duration,
        ));
    }

    debug!(
        "Computed {} available slots for week starting {}",
        slots.len(),
        week_start
    );
    Ok(slots)
}
