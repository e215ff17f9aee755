//! Timestamp recognition for transcript lines
//!
//! Chat exports close each pull with a timestamp in one of a few shapes,
//! depending on the client that produced them:
//! - `[HH:MM:SS]` / `[HH:MM:SS.mmm]` (clock only, anchored on `today`)
//! - `M/D/YYYY H:MM AM|PM`, optionally `M/D/YYYY at H:MM AM|PM`
//! - `Today at H:MM AM|PM` / `Yesterday at H:MM AM|PM`
//!
//! The timestamp must open the line; trailing text is ignored. Parsing is
//! strict: out-of-range fields make the whole line "not a timestamp".

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::scan::{digits_between, skip_whitespace1};

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// `[HH:MM:SS(.mmm)]`
    Clock,
    /// `M/D/YYYY [at] H:MM AM|PM`
    Calendar,
    /// `Today at H:MM AM|PM`, `Yesterday at H:MM AM|PM`
    Relative,
}

impl TimestampFormat {
    /// Every format, in recognition order.
    pub const ALL: [TimestampFormat; 3] = [
        TimestampFormat::Clock,
        TimestampFormat::Calendar,
        TimestampFormat::Relative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampFormat::Clock => "clock",
            TimestampFormat::Calendar => "calendar",
            TimestampFormat::Relative => "relative",
        }
    }
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clock" => Ok(TimestampFormat::Clock),
            "calendar" => Ok(TimestampFormat::Calendar),
            "relative" => Ok(TimestampFormat::Relative),
            other => Err(format!(
                "unknown timestamp format '{other}' (expected clock, calendar or relative)"
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TimestampParser {
    today: NaiveDate,
    formats: Vec<TimestampFormat>,
}

impl TimestampParser {
    /// Parser trying every format. `today` resolves relative markers and
    /// anchors clock-only stamps.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_formats(today, TimestampFormat::ALL.to_vec())
    }

    /// Parser restricted to `formats`, tried in the given order.
    pub fn with_formats(today: NaiveDate, formats: Vec<TimestampFormat>) -> Self {
        Self { today, formats }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn formats(&self) -> &[TimestampFormat] {
        &self.formats
    }

    pub fn is_timestamp(&self, line: &str) -> bool {
        self.parse(line).is_some()
    }

    /// First registered format that parses the line.
    pub fn parse(&self, line: &str) -> Option<NaiveDateTime> {
        let line = line.trim();
        self.formats.iter().find_map(|format| match format {
            TimestampFormat::Clock => self.parse_clock(line),
            TimestampFormat::Calendar => parse_calendar(line),
            TimestampFormat::Relative => self.parse_relative(line),
        })
    }

    // parse [HH:MM:SS] or [HH:MM:SS.mmm]
    fn parse_clock(&self, line: &str) -> Option<NaiveDateTime> {
        let rest = line.strip_prefix('[')?;
        let (hour, rest) = digits_between(rest, 2, 2)?;
        let (minute, rest) = digits_between(rest.strip_prefix(':')?, 2, 2)?;
        let (second, rest) = digits_between(rest.strip_prefix(':')?, 2, 2)?;

        let (millis, rest) = match rest.strip_prefix('.') {
            Some(fraction) => digits_between(fraction, 3, 3)?,
            None => (0, rest),
        };
        rest.strip_prefix(']')?;

        // leap-second millis are not a thing in chat exports
        if second > 59 {
            return None;
        }
        let time = NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
        Some(self.today.and_time(time))
    }

    // parse Today at H:MM AM or Yesterday at H:MM PM
    fn parse_relative(&self, line: &str) -> Option<NaiveDateTime> {
        let (date, rest) = if let Some(rest) = line.strip_prefix("Today at ") {
            (self.today, rest)
        } else if let Some(rest) = line.strip_prefix("Yesterday at ") {
            (self.today.pred_opt()?, rest)
        } else {
            return None;
        };
        let time = parse_clock_12h(rest)?;
        Some(date.and_time(time))
    }
}

// parse M/D/YYYY H:MM AM or M/D/YYYY at H:MM AM
fn parse_calendar(line: &str) -> Option<NaiveDateTime> {
    let (month, rest) = digits_between(line, 1, 2)?;
    let (day, rest) = digits_between(rest.strip_prefix('/')?, 1, 2)?;
    let (year, rest) = digits_between(rest.strip_prefix('/')?, 4, 4)?;

    let rest = skip_whitespace1(rest)?;
    let rest = match rest.strip_prefix("at").and_then(skip_whitespace1) {
        Some(after_at) => after_at,
        None => rest,
    };

    let date = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, day)?;
    let time = parse_clock_12h(rest)?;
    Some(date.and_time(time))
}

/// `H:MM AM|PM` with optional whitespace before the meridiem; hours 1-12.
fn parse_clock_12h(input: &str) -> Option<NaiveTime> {
    let (hour, rest) = digits_between(input, 1, 2)?;
    let (minute, rest) = digits_between(rest.strip_prefix(':')?, 2, 2)?;
    let rest = rest.trim_start();

    let is_pm = if rest.starts_with("PM") {
        true
    } else if rest.starts_with("AM") {
        false
    } else {
        return None;
    };

    if !(1..=12).contains(&hour) {
        return None;
    }
    let hour = match (hour, is_pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, true) => h + 12,
        (h, false) => h,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}
