// --- File: crates/slotbridge_slots/src/dates.rs ---
use chrono::{Datelike, Days, NaiveDate};
use std::fmt;

/// Format used by the upstream service to address a week, e.g. `20240701`.
pub const WEEK_KEY_FORMAT: &str = "%Y%m%d";

/// Latest Monday on or before `date`. A Monday maps to itself.
pub fn previous_monday(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_monday()))
}

/// Earliest Monday on or after `date`. A Monday maps to itself.
pub fn next_monday(date: NaiveDate) -> NaiveDate {
    let ahead = (7 - date.weekday().num_days_from_monday()) % 7;
    date + Days::new(u64::from(ahead))
}

pub fn format_week_key(date: NaiveDate) -> String {
    date.format(WEEK_KEY_FORMAT).to_string()
}

/// A week addressed by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// The week that contains `date`.
    pub fn containing(date: NaiveDate) -> Self {
        WeekKey(previous_monday(date))
    }

    pub fn monday(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_week_key(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn previous_monday_of_a_wednesday_is_two_days_back() {
        assert_eq!(previous_monday(date(2024, 7, 3)), date(2024, 7, 1));
    }

    #[test]
    fn previous_monday_of_a_sunday_stays_in_the_same_week() {
        assert_eq!(previous_monday(date(2024, 7, 7)), date(2024, 7, 1));
    }

    #[test]
    fn mondays_are_fixed_points() {
        let monday = date(2024, 7, 1);
        assert_eq!(previous_monday(monday), monday);
        assert_eq!(next_monday(monday), monday);
    }

    #[test]
    fn next_monday_rolls_into_the_following_week() {
        assert_eq!(next_monday(date(2024, 7, 2)), date(2024, 7, 8));
        assert_eq!(next_monday(date(2024, 7, 7)), date(2024, 7, 8));
    }

    #[test]
    fn previous_monday_crosses_year_boundary() {
        // 2025-01-01 is a Wednesday
        assert_eq!(previous_monday(date(2025, 1, 1)), date(2024, 12, 30));
    }

    #[test]
    fn week_key_is_compact_and_zero_padded() {
        assert_eq!(format_week_key(date(2024, 7, 1)), "20240701");
        assert_eq!(WeekKey::containing(date(2024, 7, 5)).to_string(), "20240701");
    }

    proptest! {
        #[test]
        fn distinct_mondays_have_distinct_week_keys(a in 0i64..20_000, b in 0i64..20_000) {
            let base = date(1900, 1, 1); // a Monday
            let first = base + chrono::Duration::weeks(a);
            let second = base + chrono::Duration::weeks(b);
            prop_assert_eq!(first == second, format_week_key(first) == format_week_key(second));
        }

        #[test]
        fn previous_monday_is_a_monday_within_six_days(days in 0i64..100_000) {
            let d = date(1900, 1, 1) + chrono::Duration::days(days);
            let monday = previous_monday(d);
            prop_assert_eq!(monday.weekday(), Weekday::Mon);
            prop_assert!(monday <= d);
            prop_assert!((d - monday).num_days() <= 6);
        }

        #[test]
        fn next_monday_is_a_monday_within_six_days(days in 0i64..100_000) {
            let d = date(1900, 1, 1) + chrono::Duration::days(days);
            let monday = next_monday(d);
            prop_assert_eq!(monday.weekday(), Weekday::Mon);
            prop_assert!(monday >= d);
            prop_assert!((monday - d).num_days() <= 6);
        }
    }
}
