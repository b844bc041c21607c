//! The month-day rule token grammar.
//!
//! A configuration record names the day an extract runs within a month using a
//! short token. Three shapes are valid, tried in this order (first match wins):
//!
//! 1. **Numeric day** — `^[0-9]+$`, a literal day of month (`15`). Clamped to
//!    the month's last day when too large, then snapped backward to the
//!    nearest working day.
//! 2. **Weekday + occurrence** — `^(SUN|..|SAT)-(1|2|3|4|L|F)$`, e.g. `FRI-2`
//!    (second Friday), `FRI-L` (last Friday), `MON-F` (first Monday).
//! 3. **Fixed keyword** — `^(LW|FW|LD|FD)$`: last/first working day,
//!    last/first calendar day.
//!
//! Matching is case-insensitive. Tokens are validated once per configuration
//! record and carried through the rest of the run as a [`MonthDayRule`]; no
//! regex runs after parse. Anything that matches none of the patterns is a
//! fatal configuration error at the driver level.

use chrono::Weekday;

/// Which occurrence of a weekday within the month a rule selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// `DOW-1` .. `DOW-4`: the Nth match scanning forward from the 1st.
    Nth(u32),
    /// `DOW-F`: the first match scanning forward from the 1st.
    First,
    /// `DOW-L`: the first match scanning backward from the month's last day.
    Last,
}

/// A validated month-day rule token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthDayRule {
    /// Literal day of month, `1..`. Resolution clamps to the month's actual
    /// length and then walks back to the nearest working day.
    Day(u32),
    /// `FD`: first calendar day, no search.
    FirstDay,
    /// `LD`: last calendar day, no search.
    LastDay,
    /// `FW`: first working day (Mon-Fri) of the month.
    FirstWorkingDay,
    /// `LW`: last working day (Mon-Fri) of the month.
    LastWorkingDay,
    /// `DOW-n` / `DOW-F` / `DOW-L`: an occurrence of a single weekday.
    DowOccurrence { weekday: Weekday, occurrence: Occurrence },
}

impl MonthDayRule {
    /// Validate and convert a raw token. `None` means the token matches none
    /// of the three grammar patterns and the configuration record is invalid.
    pub fn parse(token: &str) -> Option<MonthDayRule> {
        if regex!(r"^[0-9]+$").is_match(token) {
            // Day 0 would pass the pattern but can never name a date.
            let day: u32 = token.parse().ok()?;
            return if day >= 1 { Some(MonthDayRule::Day(day)) } else { None };
        }

        if let Some(caps) = regex!(r"(?i)^(SUN|MON|TUE|WED|THU|FRI|SAT)-(1|2|3|4|L|F)$").captures(token) {
            let weekday = weekday_from_abbrev(&caps[1])?;
            let occurrence = match caps[2].to_ascii_uppercase().as_str() {
                "L" => Occurrence::Last,
                "F" => Occurrence::First,
                n => Occurrence::Nth(n.parse().ok()?),
            };
            return Some(MonthDayRule::DowOccurrence { weekday, occurrence });
        }

        if let Some(caps) = regex!(r"(?i)^(LW|FW|LD|FD)$").captures(token) {
            return Some(match caps[1].to_ascii_uppercase().as_str() {
                "LW" => MonthDayRule::LastWorkingDay,
                "FW" => MonthDayRule::FirstWorkingDay,
                "LD" => MonthDayRule::LastDay,
                _ => MonthDayRule::FirstDay,
            });
        }

        None
    }
}

fn weekday_from_abbrev(name: &str) -> Option<Weekday> {
    match name.to_ascii_uppercase().as_str() {
        "SUN" => Some(Weekday::Sun),
        "MON" => Some(Weekday::Mon),
        "TUE" => Some(Weekday::Tue),
        "WED" => Some(Weekday::Wed),
        "THU" => Some(Weekday::Thu),
        "FRI" => Some(Weekday::Fri),
        "SAT" => Some(Weekday::Sat),
        _ => None,
    }
}
