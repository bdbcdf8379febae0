// --- File: crates/slotbridge_slots/src/validators.rs ---
use chrono::{Datelike, NaiveDateTime, Weekday};
use slotbridge_common::{is_not_blank, RuleSet};
use validator::ValidateEmail;

use crate::models::{AvailabilityQuery, BookSlotRequest};

pub fn availability_rules() -> RuleSet<AvailabilityQuery> {
    RuleSet::new().rule("MondayDate", "The date must be a Monday.", |q: &AvailabilityQuery| {
        q.monday_date.weekday() == Weekday::Mon
    })
}

/// Rules for an inbound booking. `now` is the instant "in the future" is measured against.
///
/// Rules do not short-circuit: a missing start reports both that it is empty
/// and that it is not in the future.
pub fn booking_rules(now: NaiveDateTime) -> RuleSet<BookSlotRequest> {
    RuleSet::new()
        .rule("FacilityId", "FacilityId cannot be empty.", |r: &BookSlotRequest| {
            r.facility_id.is_some_and(|id| !id.is_nil())
        })
        .rule("Start", "Start date cannot be empty.", |r: &BookSlotRequest| {
            r.start.is_some()
        })
        .rule("Start", "Start date must be in the future.", move |r: &BookSlotRequest| {
            r.start.is_some_and(|start| start > now)
        })
        .rule("End", "End date cannot be empty.", |r: &BookSlotRequest| {
            r.end.is_some()
        })
        .rule("End", "End date must be greater than start date.", |r: &BookSlotRequest| {
            match (r.start, r.end) {
                (Some(start), Some(end)) => end > start,
                _ => false,
            }
        })
        .rule("Comments", "Comments cannot be empty.", |r: &BookSlotRequest| {
            is_not_blank(&r.comments)
        })
        .rule("Name", "Name cannot be empty.", |r: &BookSlotRequest| {
            is_not_blank(&r.name)
        })
        .rule("SecondName", "SecondName cannot be empty.", |r: &BookSlotRequest| {
            is_not_blank(&r.second_name)
        })
        .rule("Email", "Email cannot be empty.", |r: &BookSlotRequest| {
            is_not_blank(&r.email)
        })
        // Blank emails are reported once, by the rule above
        .rule("Email", "Email is not a valid email address.", |r: &BookSlotRequest| {
            !is_not_blank(&r.email) || r.email.trim().validate_email()
        })
        .rule("Phone", "Phone cannot be empty.", |r: &BookSlotRequest| {
            is_not_blank(&r.phone)
        })
}
