//! Date resolution: bounded weekday scans and month-day rule evaluation.
//!
//! The whole rule vocabulary reduces to one primitive: starting from a known
//! date (the 1st or the last day of a month), walk day by day in one
//! direction until the Nth date whose weekday is in a [`DaySet`].
//!
//! ```text
//! MonthDayRule ──▶ resolve_month_day() ──▶ pick start/mask/occurrence/direction
//!                                       └─▶ find_nth_weekday() ──▶ NaiveDate
//! ```
//!
//! The scan is bounded at 31 offsets (a full month), and exhaustion is an
//! explicit `None` rather than a stale date. For every start/mask/occurrence
//! combination the grammar can produce (single month, occurrence ≤ 4) a match
//! always exists inside the window, so a `None` here means the inputs were
//! constructed outside the grammar.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{DaySet, days_in_month};
use crate::token::{MonthDayRule, Occurrence};

/// Scan direction for [`find_nth_weekday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Offsets tried by the bounded scan: `0..SCAN_WINDOW` days from the start.
pub const SCAN_WINDOW: u32 = 31;

/// Walk from `start` in `direction`, one day at a time (offset 0 is `start`
/// itself), counting dates whose weekday is in `mask`. Returns the date of the
/// `occurrence`-th match, or `None` if the scan window is exhausted.
pub fn find_nth_weekday(
    start: NaiveDate,
    mask: DaySet,
    occurrence: u32,
    direction: Direction,
) -> Option<NaiveDate> {
    let mut date = start;
    let mut matched = 0;

    for offset in 0..SCAN_WINDOW {
        if offset > 0 {
            date = match direction {
                Direction::Forward => date.succ_opt()?,
                Direction::Backward => date.pred_opt()?,
            };
        }
        if mask.matches(date.weekday()) {
            matched += 1;
            if matched == occurrence {
                return Some(date);
            }
        }
    }

    None
}

/// Evaluate a month-day rule for one month of the processing year.
///
/// Numeric days larger than the month are clamped to its last day; numeric
/// resolution then snaps backward to the nearest working day, which may cross
/// into the previous month (day `1` of a month starting on a weekend resolves
/// to the prior month's last working day).
pub fn resolve_month_day(year: i32, month: u32, rule: &MonthDayRule) -> Option<NaiveDate> {
    let last_day = *days_in_month(year).get(month.checked_sub(1)? as usize)?;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = NaiveDate::from_ymd_opt(year, month, last_day)?;

    match rule {
        MonthDayRule::FirstDay => Some(first),
        MonthDayRule::LastDay => Some(last),
        MonthDayRule::FirstWorkingDay => {
            find_nth_weekday(first, DaySet::WORKWEEK, 1, Direction::Forward)
        }
        MonthDayRule::LastWorkingDay => {
            find_nth_weekday(last, DaySet::WORKWEEK, 1, Direction::Backward)
        }
        MonthDayRule::Day(day) => {
            let start = NaiveDate::from_ymd_opt(year, month, (*day).min(last_day))?;
            find_nth_weekday(start, DaySet::WORKWEEK, 1, Direction::Backward)
        }
        MonthDayRule::DowOccurrence { weekday, occurrence } => {
            let mask = DaySet::single(*weekday);
            match occurrence {
                Occurrence::Last => find_nth_weekday(last, mask, 1, Direction::Backward),
                Occurrence::First => find_nth_weekday(first, mask, 1, Direction::Forward),
                Occurrence::Nth(n) => find_nth_weekday(first, mask, *n, Direction::Forward),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn rule(token: &str) -> MonthDayRule {
        MonthDayRule::parse(token).unwrap()
    }

    #[test]
    fn forward_scan_matches_start_itself() {
        // 2025-01-01 is a Wednesday, already a working day.
        let found =
            find_nth_weekday(date(2025, 1, 1), DaySet::WORKWEEK, 1, Direction::Forward).unwrap();
        assert_eq!(found, date(2025, 1, 1));
    }

    #[test]
    fn backward_scan_last_friday() {
        // 2025-02-28 is itself a Friday.
        let found = find_nth_weekday(
            date(2025, 2, 28),
            DaySet::single(Weekday::Fri),
            1,
            Direction::Backward,
        )
        .unwrap();
        assert_eq!(found, date(2025, 2, 28));
    }

    #[test]
    fn nth_occurrence_counts_matches_not_days() {
        // Mondays of March 2025: 3, 10, 17, 24, 31.
        let mondays = DaySet::single(Weekday::Mon);
        let second =
            find_nth_weekday(date(2025, 3, 1), mondays, 2, Direction::Forward).unwrap();
        assert_eq!(second, date(2025, 3, 10));
        let fourth =
            find_nth_weekday(date(2025, 3, 1), mondays, 4, Direction::Forward).unwrap();
        assert_eq!(fourth, date(2025, 3, 24));
    }

    #[test]
    fn exhausted_scan_is_none() {
        assert_eq!(
            find_nth_weekday(date(2025, 1, 1), DaySet::single(Weekday::Fri), 6, Direction::Forward),
            None
        );
        assert_eq!(
            find_nth_weekday(date(2025, 1, 1), DaySet::empty(), 1, Direction::Forward),
            None
        );
    }

    #[test]
    fn last_working_day() {
        // Feb 2025 ends on a Friday.
        assert_eq!(resolve_month_day(2025, 2, &rule("LW")), Some(date(2025, 2, 28)));
        // Aug 2025 ends on a Sunday; last working day is Friday the 29th.
        assert_eq!(resolve_month_day(2025, 8, &rule("LW")), Some(date(2025, 8, 29)));
    }

    #[test]
    fn first_working_day() {
        // Nov 2025 starts on a Saturday; first working day is Monday the 3rd.
        assert_eq!(resolve_month_day(2025, 11, &rule("FW")), Some(date(2025, 11, 3)));
        // Jul 2025 starts on a Tuesday.
        assert_eq!(resolve_month_day(2025, 7, &rule("FW")), Some(date(2025, 7, 1)));
    }

    #[test]
    fn literal_first_and_last_day() {
        assert_eq!(resolve_month_day(2025, 9, &rule("FD")), Some(date(2025, 9, 1)));
        assert_eq!(resolve_month_day(2025, 9, &rule("LD")), Some(date(2025, 9, 30)));
        // leap-year February
        assert_eq!(resolve_month_day(2024, 2, &rule("LD")), Some(date(2024, 2, 29)));
    }

    #[test]
    fn numeric_day_clamps_then_snaps_to_working_day() {
        // Feb 2025 has 28 days; day 30 clamps to the 28th, a Friday.
        assert_eq!(resolve_month_day(2025, 2, &rule("30")), Some(date(2025, 2, 28)));
        // 2025-03-15 is a Saturday; nearest prior working day is Friday the 14th.
        assert_eq!(resolve_month_day(2025, 3, &rule("15")), Some(date(2025, 3, 14)));
        // 2025-03-17 is a Monday, already a working day.
        assert_eq!(resolve_month_day(2025, 3, &rule("17")), Some(date(2025, 3, 17)));
    }

    #[test]
    fn numeric_day_can_walk_into_previous_month() {
        // 2025-06-01 is a Sunday; the backward walk lands on Friday May 30.
        assert_eq!(resolve_month_day(2025, 6, &rule("1")), Some(date(2025, 5, 30)));
    }

    #[test]
    fn weekday_occurrences() {
        // Fridays of March 2025: 7, 14, 21, 28.
        assert_eq!(resolve_month_day(2025, 3, &rule("FRI-2")), Some(date(2025, 3, 14)));
        assert_eq!(resolve_month_day(2025, 3, &rule("FRI-L")), Some(date(2025, 3, 28)));
        assert_eq!(resolve_month_day(2025, 3, &rule("FRI-F")), Some(date(2025, 3, 7)));
        // Thanksgiving-style: 4th Thursday of November 2025 is the 27th.
        assert_eq!(resolve_month_day(2025, 11, &rule("THU-4")), Some(date(2025, 11, 27)));
    }

    #[test]
    fn out_of_range_month_is_none() {
        assert_eq!(resolve_month_day(2025, 0, &rule("FD")), None);
        assert_eq!(resolve_month_day(2025, 13, &rule("FD")), None);
    }
}
