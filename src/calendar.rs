//! Calendar primitives: leap years, month tables, and day-of-week sets.
//!
//! Everything here is a pure lookup or a cheap bit operation. The rest of the
//! engine builds on these three things:
//!
//! - the per-month day counts for a year (leap-aware),
//! - the 3-letter month abbreviation table (`JAN`..`DEC`),
//! - [`DaySet`], a weekday bitmask used everywhere a rule needs to ask
//!   "is this date's weekday one of the ones I care about?".

use chrono::Weekday;

/// Month abbreviations in calendar order, used for both lookup and the fixed
/// 12-month list of monthly schedules.
pub const MONTH_ABBREVS: [&str; 12] =
    ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
const DAYS_PER_MONTH_LEAP: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

/// Day counts for the twelve months of `year`, January first.
pub fn days_in_month(year: i32) -> [u32; 12] {
    if is_leap_year(year) { DAYS_PER_MONTH_LEAP } else { DAYS_PER_MONTH }
}

/// Look up a 3-letter month abbreviation (case-insensitive) and return its
/// 1-based month number. `None` if the abbreviation is not one of `JAN`..`DEC`.
pub fn month_number(abbrev: &str) -> Option<u32> {
    let upper = abbrev.to_ascii_uppercase();
    MONTH_ABBREVS.iter().position(|m| *m == upper).map(|idx| idx as u32 + 1)
}

bitflags::bitflags! {
    /// Set of weekdays a rule matches against, one bit per day.
    ///
    /// Bit positions follow the Sunday-first numbering (`Sun = 1 << 0` ..
    /// `Sat = 1 << 6`) so membership tests line up with
    /// `Weekday::num_days_from_sunday`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DaySet: u8 {
        const SUN = 1 << 0;
        const MON = 1 << 1;
        const TUE = 1 << 2;
        const WED = 1 << 3;
        const THU = 1 << 4;
        const FRI = 1 << 5;
        const SAT = 1 << 6;
    }
}

impl DaySet {
    /// Monday through Friday, the set behind the `M-F` shortcut and the
    /// working-day keywords (`LW`/`FW`).
    pub const WORKWEEK: DaySet =
        DaySet::MON.union(DaySet::TUE).union(DaySet::WED).union(DaySet::THU).union(DaySet::FRI);

    /// The set containing exactly one weekday.
    pub fn single(weekday: Weekday) -> DaySet {
        DaySet::from_bits_truncate(1 << weekday.num_days_from_sunday())
    }

    /// Membership test for a concrete date's weekday.
    pub fn matches(self, weekday: Weekday) -> bool {
        self.contains(DaySet::single(weekday))
    }

    /// Parse a single 3-letter day name (case-insensitive) into its set bit.
    pub fn parse_day(name: &str) -> Option<DaySet> {
        match name.to_ascii_uppercase().as_str() {
            "SUN" => Some(DaySet::SUN),
            "MON" => Some(DaySet::MON),
            "TUE" => Some(DaySet::TUE),
            "WED" => Some(DaySet::WED),
            "THU" => Some(DaySet::THU),
            "FRI" => Some(DaySet::FRI),
            "SAT" => Some(DaySet::SAT),
            _ => None,
        }
    }

    /// Parse a weekly day-of-week spec: the literal `M-F` shortcut, or a
    /// comma-delimited list of 3-letter day names (`MON,WED,FRI`).
    ///
    /// Every listed name must be recognized; an unknown name fails the whole
    /// spec rather than being dropped. An empty spec is also a failure.
    pub fn parse_spec(spec: &str) -> Option<DaySet> {
        if spec.trim().eq_ignore_ascii_case("M-F") {
            return Some(DaySet::WORKWEEK);
        }
        let mut set = DaySet::empty();
        for name in spec.split(',') {
            set |= DaySet::parse_day(name.trim())?;
        }
        if set.is_empty() { None } else { Some(set) }
    }
}
