//! Calendar builders and the assembly driver.
//!
//! [`build_calendar`] reads configuration records one by one and dispatches on
//! the time-frame code:
//!
//! - `W` expands a day-of-week mask across every day of the processing year,
//! - `M` applies the record's rule token to all twelve months,
//! - `Q`/`S`/`A` apply the rule token to the record's own month list.
//!
//! Records accumulate in configuration-file order; no cross-record sorting is
//! performed. Downstream consumers receive the calendar exactly as the
//! configuration ordered it.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::calendar::{DaySet, MONTH_ABBREVS, month_number};
use crate::config::{ExtractDefinition, TimeFrame};
use crate::error::CalendarError;
use crate::resolve::resolve_month_day;
use crate::token::MonthDayRule;

/// One resolved run date: when, which weekday that is, and the configuration
/// record it came from. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRecord {
    pub date: NaiveDate,
    pub weekday: Weekday,
    /// Verbatim configuration line that produced this date.
    pub source: String,
}

impl CalendarRecord {
    fn new(date: NaiveDate, source: &str) -> CalendarRecord {
        CalendarRecord { date, weekday: date.weekday(), source: source.to_string() }
    }
}

impl fmt::Display for CalendarRecord {
    /// Output-file line format: `YYYY-MM-DD|Dow|<config record>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.date.format("%Y-%m-%d"), self.weekday, self.source)
    }
}

/// Build the full-year calendar for every record in `config`.
///
/// Fails fast: the first invalid record aborts the run and no partial
/// calendar is returned. Blank lines are skipped.
pub fn build_calendar(year: i32, config: &str) -> Result<Vec<CalendarRecord>, CalendarError> {
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or(CalendarError::InvalidYear { year })?;

    let mut records = Vec::new();
    for line in config.lines() {
        if line.trim().is_empty() {
            continue;
        }
        let def = ExtractDefinition::parse_line(line)?;
        debug!(extract_id = %def.extract_id, time_frame = ?def.time_frame, "processing config record");

        match def.time_frame {
            TimeFrame::Weekly => {
                let mask = DaySet::parse_spec(&def.dow_dom).ok_or_else(|| {
                    CalendarError::InvalidDaySpec {
                        spec: def.dow_dom.clone(),
                        record: def.source.clone(),
                    }
                })?;
                build_weekly(jan1, mask, &def.source, &mut records);
            }
            // Monthly records carry their rule token in the DOW_DOM field and
            // always cover all twelve months.
            TimeFrame::Monthly => {
                build_periodic(year, &MONTH_ABBREVS.join(","), &def.dow_dom, &def.source, &mut records)?;
            }
            TimeFrame::Quarterly | TimeFrame::Semiannual | TimeFrame::Annual => {
                build_periodic(year, &def.months, &def.month_day, &def.source, &mut records)?;
            }
        }
    }

    Ok(records)
}

/// Emit one record for every day of the year whose weekday is in `mask`.
fn build_weekly(jan1: NaiveDate, mask: DaySet, source: &str, out: &mut Vec<CalendarRecord>) {
    let year = jan1.year();
    let mut date = jan1;
    while date.year() == year {
        if mask.matches(date.weekday()) {
            out.push(CalendarRecord::new(date, source));
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
}

/// Emit one record per listed month, resolving `token` within each.
///
/// The token is validated once, before the month loop, so a bad token fails
/// the record without emitting any of its months.
fn build_periodic(
    year: i32,
    months: &str,
    token: &str,
    source: &str,
    out: &mut Vec<CalendarRecord>,
) -> Result<(), CalendarError> {
    let rule = MonthDayRule::parse(token).ok_or_else(|| CalendarError::InvalidMonthDayRule {
        token: token.to_string(),
        record: source.to_string(),
    })?;

    for abbrev in months.split(',') {
        let abbrev = abbrev.trim();
        let month = month_number(abbrev).ok_or_else(|| CalendarError::InvalidMonth {
            month: abbrev.to_string(),
            record: source.to_string(),
        })?;
        let date = resolve_month_day(year, month, &rule).ok_or_else(|| {
            CalendarError::Unresolvable {
                token: token.to_string(),
                year,
                month,
                record: source.to_string(),
            }
        })?;
        debug!(%date, month = abbrev, "resolved run date");
        out.push(CalendarRecord::new(date, source));
    }

    Ok(())
}
