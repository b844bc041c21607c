//! Rule-based run-calendar engine.
//!
//! A configuration file describes recurring extracts (weekly day-of-week
//! masks, monthly/quarterly/semiannual/annual month-day rules); this crate
//! expands those rules into the concrete dates they fall on for a single
//! processing year.
//!
//! ```
//! use runcal::{Context, build_run_calendar, render_calendar};
//!
//! let ctx = Context { processing_year: 2025 };
//! let records = build_run_calendar("Qtr|Claims|Q||JAN,APR,JUL,OCT|LW|Y|N|SFTP", &ctx).unwrap();
//! let file = render_calendar(&records);
//! assert!(file.starts_with("2025-01-31|Fri|Qtr|"));
//! ```

#[macro_use]
mod macros;

pub mod calendar;
pub mod config;
pub mod error;
pub mod resolve;
pub mod schedule;
pub mod token;

mod api;

pub use api::{Context, build_run_calendar, calendar_file_name, render_calendar};
pub use error::CalendarError;
pub use schedule::CalendarRecord;
