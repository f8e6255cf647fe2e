//! Calendar projection: per-day shift views derived from a persisted
//! schedule
//!
//! Pure functions over an in-memory schedule; no store or network
//! access. The projection is recomputed from the single stored schedule
//! whenever it changes and is never persisted itself, so the calendar
//! marks can never drift from the shift list.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveDateTime};

use shared::{parse_timestamp, Schedule, Shift};

/// Shifts whose start falls on the given local calendar date, ordered
/// by start time. The shift end is not considered: a shift running past
/// midnight is attributed to the day it starts on only.
pub fn shifts_on_date(schedule: &Schedule, date: NaiveDate) -> Vec<Shift> {
    let mut day: Vec<(NaiveDateTime, Shift)> = schedule
        .shifts
        .iter()
        .filter_map(|shift| parse_timestamp(&shift.start).map(|start| (start, shift.clone())))
        .filter(|(start, _)| start.date() == date)
        .collect();
    day.sort_by_key(|(start, _)| *start);
    day.into_iter().map(|(_, shift)| shift).collect()
}

/// The distinct calendar dates on which at least one shift starts, used
/// to annotate the calendar widget
pub fn marked_dates(schedule: &Schedule) -> BTreeSet<NaiveDate> {
    schedule
        .shifts
        .iter()
        .filter_map(|shift| parse_timestamp(&shift.start))
        .map(|start| start.date())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shift(staff_id: &str, start: &str, end: &str) -> Shift {
        Shift {
            staff_id: staff_id.to_string(),
            name: format!("Staff {staff_id}"),
            start: start.to_string(),
            end: end.to_string(),
            cost: 80.0,
        }
    }

    fn sample_schedule() -> Schedule {
        Schedule {
            shifts: vec![
                shift("2", "2024-01-01T13:00", "2024-01-01T21:00"),
                shift("1", "2024-01-01T09:00", "2024-01-01T17:00"),
                // overnight shift: starts late on the 2nd, ends on the 3rd
                shift("3", "2024-01-02T23:00", "2024-01-03T07:00"),
                shift("1", "2024-01-04T09:00", "2024-01-04T17:00"),
            ],
            total_cost: 320.0,
        }
    }

    fn day(date: &str) -> NaiveDate {
        date.parse().unwrap()
    }

    #[test]
    fn shifts_are_ordered_by_start_time() {
        let on_first = shifts_on_date(&sample_schedule(), day("2024-01-01"));
        assert_eq!(on_first.len(), 2);
        assert_eq!(on_first[0].staff_id, "1");
        assert_eq!(on_first[1].staff_id, "2");
    }

    #[test]
    fn overnight_shift_belongs_to_its_start_day_only() {
        let schedule = sample_schedule();
        let on_second = shifts_on_date(&schedule, day("2024-01-02"));
        let on_third = shifts_on_date(&schedule, day("2024-01-03"));
        assert_eq!(on_second.len(), 1);
        assert_eq!(on_second[0].staff_id, "3");
        assert!(on_third.is_empty());
    }

    #[test]
    fn projection_is_deterministic() {
        let schedule = sample_schedule();
        let first = shifts_on_date(&schedule, day("2024-01-01"));
        let second = shifts_on_date(&schedule, day("2024-01-01"));
        assert_eq!(first, second);
    }

    #[test]
    fn marked_dates_are_the_distinct_start_days() {
        let marks = marked_dates(&sample_schedule());
        let expected: BTreeSet<NaiveDate> =
            [day("2024-01-01"), day("2024-01-02"), day("2024-01-04")]
                .into_iter()
                .collect();
        assert_eq!(marks, expected);
    }

    #[test]
    fn union_over_marked_dates_reconstructs_the_schedule() {
        let schedule = sample_schedule();
        let mut reconstructed: Vec<Shift> = marked_dates(&schedule)
            .into_iter()
            .flat_map(|date| shifts_on_date(&schedule, date))
            .collect();

        assert_eq!(reconstructed.len(), schedule.shifts.len());
        let mut original = schedule.shifts.clone();
        let key = |s: &Shift| (s.start.clone(), s.staff_id.clone());
        reconstructed.sort_by_key(key);
        original.sort_by_key(key);
        assert_eq!(reconstructed, original);
    }

    #[test]
    fn empty_schedule_has_no_marks_and_no_shifts() {
        let schedule = Schedule {
            shifts: vec![],
            total_cost: 0.0,
        };
        assert!(marked_dates(&schedule).is_empty());
        assert!(shifts_on_date(&schedule, day("2024-01-01")).is_empty());
    }
}
