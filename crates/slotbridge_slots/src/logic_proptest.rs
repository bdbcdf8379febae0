#[cfg(test)]
mod tests {
    use crate::error::SlotsError;
    use crate::logic::{compute_available_slots, generate_slots_for_day};
    use crate::models::{BusySlot, DayAvailability, Facility, WeeklyAvailability, WorkPeriod};
    use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
    use proptest::prelude::*;
    use uuid::Uuid;

    fn day_start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    // Builds an ordered work period from non-negative offsets
    fn work_period(start: i64, morning: i64, lunch: i64, afternoon: i64) -> WorkPeriod {
        let lunch_start_hour = start + morning;
        let lunch_end_hour = lunch_start_hour + lunch;
        WorkPeriod {
            start_hour: start,
            lunch_start_hour,
            lunch_end_hour,
            end_hour: (lunch_end_hour + afternoon).min(24),
        }
    }

    fn busy_slots(raw: &[(i64, i64)]) -> Vec<BusySlot> {
        raw.iter()
            .map(|(offset, length)| {
                let start = day_start() + Duration::minutes(*offset);
                BusySlot {
                    start,
                    end: start + Duration::minutes(*length),
                }
            })
            .collect()
    }

    proptest! {
        // Every slot starts in a bookable hour and lasts exactly one slot duration
        #[test]
        fn test_slots_start_in_working_hours(
            start in 0..10i64,
            morning in 0..5i64,
            lunch in 0..3i64,
            afternoon in 0..10i64,
            duration_minutes in 5..180i64,
        ) {
            let wp = work_period(start, morning, lunch, afternoon);
            let duration = Duration::minutes(duration_minutes);
            let slots = generate_slots_for_day(Uuid::nil(), day_start(), &wp, &[], duration);

            for slot in &slots {
                let hour = i64::from(slot.start.hour());
                prop_assert!(wp.is_bookable_hour(hour), "slot at {:?} outside {:?}", slot.start, wp);
                prop_assert_eq!(slot.end - slot.start, duration);
                prop_assert!(slot.start >= day_start() + Duration::hours(wp.start_hour));
                prop_assert!(slot.start <= day_start() + Duration::hours(wp.end_hour));
            }
        }

        // Slots sit on the grid anchored at start_hour and come out in order
        #[test]
        fn test_slots_are_ordered_on_the_duration_grid(
            start in 0..10i64,
            morning in 0..5i64,
            lunch in 0..3i64,
            afternoon in 0..10i64,
            duration_minutes in 5..180i64,
        ) {
            let wp = work_period(start, morning, lunch, afternoon);
            let duration = Duration::minutes(duration_minutes);
            let slots = generate_slots_for_day(Uuid::nil(), day_start(), &wp, &[], duration);
            let first = day_start() + Duration::hours(wp.start_hour);

            prop_assert!(slots.windows(2).all(|w| w[0].start < w[1].start));
            for slot in &slots {
                prop_assert_eq!((slot.start - first).num_minutes() % duration_minutes, 0);
            }
        }

        // No slot lies wholly inside a busy interval
        #[test]
        fn test_no_slot_is_contained_in_a_busy_interval(
            duration_minutes in 5..120i64,
            raw_busy in prop::collection::vec((0..1440i64, 1..300i64), 0..6),
        ) {
            let wp = work_period(8, 4, 1, 5);
            let busy = busy_slots(&raw_busy);
            let slots = generate_slots_for_day(
                Uuid::nil(), day_start(), &wp, &busy, Duration::minutes(duration_minutes),
            );

            for slot in &slots {
                for interval in &busy {
                    prop_assert!(!(slot.start >= interval.start && slot.end <= interval.end));
                }
            }
        }

        // Adding busy intervals can only remove slots
        #[test]
        fn test_busy_intervals_only_remove_slots(
            duration_minutes in 5..120i64,
            raw_busy in prop::collection::vec((0..1440i64, 1..300i64), 1..6),
        ) {
            let wp = work_period(8, 4, 1, 5);
            let duration = Duration::minutes(duration_minutes);
            let free = generate_slots_for_day(Uuid::nil(), day_start(), &wp, &[], duration);
            let busy = generate_slots_for_day(
                Uuid::nil(), day_start(), &wp, &busy_slots(&raw_busy), duration,
            );

            prop_assert!(busy.len() <= free.len());
            for slot in &busy {
                prop_assert!(free.contains(slot));
            }
        }

        // Whatever the upstream sends, a day either fails cleanly or stays on its own date
        #[test]
        fn test_arbitrary_upstream_days_never_leave_their_date(
            hours in prop::array::uniform4(prop_oneof![-2..27i64, any::<i64>()]),
            duration_minutes in prop_oneof![-5..1500i64, any::<i64>()],
        ) {
            let [start_hour, lunch_start_hour, lunch_end_hour, end_hour] = hours;
            let weekly = WeeklyAvailability {
                facility: Facility {
                    facility_id: Uuid::nil(),
                    name: None,
                    address: None,
                },
                slot_duration_minutes: duration_minutes,
                monday: Some(DayAvailability {
                    work_period: WorkPeriod { start_hour, lunch_start_hour, lunch_end_hour, end_hour },
                    busy_slots: None,
                }),
                tuesday: None,
                wednesday: None,
                thursday: None,
                friday: None,
                saturday: None,
                sunday: None,
            };

            match compute_available_slots(&weekly, day_start().date()) {
                Ok(slots) => {
                    prop_assert!(slots.len() <= 24 * 60);
                    for slot in &slots {
                        prop_assert_eq!(slot.start.date(), day_start().date());
                    }
                }
                Err(err) => prop_assert!(matches!(err, SlotsError::Calculation(_))),
            }
        }
    }
}
