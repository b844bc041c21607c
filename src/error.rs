//! Fatal configuration errors.
//!
//! Rule evaluation is pure computation with no transient failure modes, so
//! there is exactly one error family: a configuration record the engine
//! refuses to process. Every variant carries the offending record verbatim so
//! an operator can find the line in the configuration file. The first error
//! aborts the whole run; a partial calendar is never published.

use thiserror::Error;

/// Number of pipe-delimited fields in a configuration record.
pub const CONFIG_FIELD_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("processing year {year} is out of range")]
    InvalidYear { year: i32 },

    #[error("config record has {found} fields, expected {CONFIG_FIELD_COUNT}: {record}")]
    MalformedRecord { found: usize, record: String },

    #[error("invalid extract time frame '{code}' in config record: {record}")]
    InvalidTimeFrame { code: String, record: String },

    #[error("invalid day-of-week value '{spec}' in config record: {record}")]
    InvalidDaySpec { spec: String, record: String },

    #[error("invalid month abbreviation '{month}' in config record: {record}")]
    InvalidMonth { month: String, record: String },

    #[error("invalid month-day value '{token}' in config record: {record}")]
    InvalidMonthDayRule { token: String, record: String },

    /// The bounded weekday scan found no match. Unreachable for tokens the
    /// grammar accepts; kept as a hard error instead of an assertion so a
    /// future grammar change cannot silently emit a wrong date.
    #[error("month-day value '{token}' has no matching date in {year}-{month:02}: {record}")]
    Unresolvable { token: String, year: i32, month: u32, record: String },
}
