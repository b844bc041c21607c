//! Public API for building and rendering run calendars.

use tracing::info;

use crate::error::CalendarError;
use crate::schedule::{CalendarRecord, build_calendar};

/// Run context: the single piece of shared state every rule evaluation reads.
///
/// One calendar run covers exactly one processing year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// The 4-digit year the calendar is generated for.
    pub processing_year: i32,
}

/// Build the run calendar for every configuration record in `config`.
///
/// `config` is newline-delimited, nine pipe-delimited fields per record (see
/// [`crate::config::ExtractDefinition`]). The first invalid record aborts the
/// run; a partial calendar is never returned.
///
/// # Example
/// ```
/// use runcal::{Context, build_run_calendar};
///
/// let ctx = Context { processing_year: 2025 };
/// let records = build_run_calendar("Yr|Year end|A||DEC|LW|N|N|EFT", &ctx).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].to_string(), "2025-12-31|Wed|Yr|Year end|A||DEC|LW|N|N|EFT");
/// ```
pub fn build_run_calendar(
    config: &str,
    ctx: &Context,
) -> Result<Vec<CalendarRecord>, CalendarError> {
    let records = build_calendar(ctx.processing_year, config)?;
    info!(year = ctx.processing_year, records = records.len(), "run calendar built");
    Ok(records)
}

/// Serialize records to the output-file format: one line per record, trailing
/// newline included. An empty calendar renders as an empty string.
pub fn render_calendar(records: &[CalendarRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}

/// Conventional output file name for a processing year.
pub fn calendar_file_name(year: i32) -> String {
    format!("RunCalendar_{year}.txt")
}
