//! Configuration records.
//!
//! One record per extract definition, nine pipe-delimited fields:
//!
//! ```text
//! ExtractID|Description|TimeFrame|DOW_DOM|Months|Month_Day|FinderFileReq|FF_Pre_Processing|DeliveryMethod
//! ```
//!
//! `TimeFrame` is one of `W`/`M`/`Q`/`S`/`A`. For weekly extracts `DOW_DOM`
//! holds a day-of-week spec (`M-F` or a day list); for monthly extracts it
//! holds the month-day rule token. Quarterly/semiannual/annual extracts name
//! their months in `Months` and their rule token in `Month_Day`. The last
//! three fields are downstream concerns (finder files, delivery) the date
//! engine passes through untouched.

use crate::error::{CONFIG_FIELD_COUNT, CalendarError};

/// How often an extract recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFrame {
    Weekly,
    Monthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl TimeFrame {
    /// Parse a single-letter time-frame code.
    pub fn parse(code: &str) -> Option<TimeFrame> {
        match code {
            "W" => Some(TimeFrame::Weekly),
            "M" => Some(TimeFrame::Monthly),
            "Q" => Some(TimeFrame::Quarterly),
            "S" => Some(TimeFrame::Semiannual),
            "A" => Some(TimeFrame::Annual),
            _ => None,
        }
    }
}

/// One parsed configuration record, fields trimmed, with the verbatim source
/// line retained for output records and error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractDefinition {
    pub extract_id: String,
    pub description: String,
    pub time_frame: TimeFrame,
    pub dow_dom: String,
    pub months: String,
    pub month_day: String,
    pub finder_file_req: String,
    pub ff_pre_processing: String,
    pub delivery_method: String,
    /// The raw configuration line, exactly as read.
    pub source: String,
}

impl ExtractDefinition {
    /// Parse one configuration line. Field count and time-frame code are
    /// checked here; the per-time-frame fields (`dow_dom`, `months`,
    /// `month_day`) are validated by the builders that consume them.
    pub fn parse_line(line: &str) -> Result<ExtractDefinition, CalendarError> {
        let fields: Vec<&str> = line.split('|').map(str::trim).collect();
        if fields.len() != CONFIG_FIELD_COUNT {
            return Err(CalendarError::MalformedRecord {
                found: fields.len(),
                record: line.to_string(),
            });
        }

        let time_frame = TimeFrame::parse(fields[2]).ok_or_else(|| {
            CalendarError::InvalidTimeFrame { code: fields[2].to_string(), record: line.to_string() }
        })?;

        Ok(ExtractDefinition {
            extract_id: fields[0].to_string(),
            description: fields[1].to_string(),
            time_frame,
            dow_dom: fields[3].to_string(),
            months: fields[4].to_string(),
            month_day: fields[5].to_string(),
            finder_file_req: fields[6].to_string(),
            ff_pre_processing: fields[7].to_string(),
            delivery_method: fields[8].to_string(),
            source: line.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weekly_record() {
        let line = "Blbtn|Blue Button|W|M-F||||N|EFT";
        let def = ExtractDefinition::parse_line(line).unwrap();
        assert_eq!(def.extract_id, "Blbtn");
        assert_eq!(def.description, "Blue Button");
        assert_eq!(def.time_frame, TimeFrame::Weekly);
        assert_eq!(def.dow_dom, "M-F");
        assert_eq!(def.months, "");
        assert_eq!(def.month_day, "");
        assert_eq!(def.delivery_method, "EFT");
        assert_eq!(def.source, line);
    }

    #[test]
    fn trims_each_field() {
        let line = " Xtr | Quarterly claims | Q | | JAN,APR,JUL,OCT | LW | Y | N | SFTP ";
        let def = ExtractDefinition::parse_line(line).unwrap();
        assert_eq!(def.extract_id, "Xtr");
        assert_eq!(def.time_frame, TimeFrame::Quarterly);
        assert_eq!(def.months, "JAN,APR,JUL,OCT");
        assert_eq!(def.month_day, "LW");
        // source keeps the original spacing
        assert_eq!(def.source, line);
    }

    #[test]
    fn time_frame_codes() {
        for (code, expected) in [
            ("W", TimeFrame::Weekly),
            ("M", TimeFrame::Monthly),
            ("Q", TimeFrame::Quarterly),
            ("S", TimeFrame::Semiannual),
            ("A", TimeFrame::Annual),
        ] {
            assert_eq!(TimeFrame::parse(code), Some(expected));
        }
        assert_eq!(TimeFrame::parse("X"), None);
        assert_eq!(TimeFrame::parse("w"), None);
        assert_eq!(TimeFrame::parse(""), None);
    }

    #[test]
    fn bad_time_frame_is_fatal() {
        let line = "Xtr|desc|X|M-F||||N|EFT";
        assert_eq!(
            ExtractDefinition::parse_line(line),
            Err(CalendarError::InvalidTimeFrame { code: "X".into(), record: line.into() })
        );
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let line = "Xtr|desc|W|M-F";
        assert_eq!(
            ExtractDefinition::parse_line(line),
            Err(CalendarError::MalformedRecord { found: 4, record: line.into() })
        );
    }
}
