//! Date display helpers.
//!
//! All rendering is done in UTC so output does not depend on the host timezone.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

pub const NOT_AVAILABLE: &str = "N/A";
pub const INVALID_DATE: &str = "Invalid Date";
pub const JUST_NOW: &str = "Just now";

/// Fixed-length approximations, largest first.
const TIME_AGO_UNITS: [(&str, i64); 6] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
];

#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Text(String),
    DateTime(DateTime<Utc>),
}

impl From<i64> for DateInput {
    fn from(ms: i64) -> Self {
        Self::Timestamp(ms)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date input: {0}")]
    Invalid(String),
}

impl DateInput {
    fn is_blank(&self) -> bool {
        match self {
            Self::Timestamp(ms) => *ms == 0,
            Self::Text(s) => s.trim().is_empty(),
            Self::DateTime(_) => false,
        }
    }

    pub fn parse(&self) -> Result<DateTime<Utc>, DateError> {
        match self {
            Self::Timestamp(ms) => DateTime::<Utc>::from_timestamp_millis(*ms)
                .ok_or_else(|| DateError::Invalid(ms.to_string())),
            Self::DateTime(dt) => Ok(*dt),
            Self::Text(s) => parse_text(s.trim()).ok_or_else(|| DateError::Invalid(s.clone())),
        }
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Absolute date and time, e.g. `Mar 4, 2025, 09:05 PM`.
///
/// Absent or blank input renders as `N/A`; input that cannot be parsed renders
/// as `Invalid Date` and is logged.
pub fn format_date(input: Option<&DateInput>) -> String {
    let Some(input) = input.filter(|i| !i.is_blank()) else {
        return NOT_AVAILABLE.to_string();
    };

    match input.parse() {
        Ok(dt) => dt.format("%b %-d, %Y, %I:%M %p").to_string(),
        Err(e) => {
            tracing::error!("{}", e);
            INVALID_DATE.to_string()
        }
    }
}

/// Calendar date portion, `YYYY-MM-DD`.
pub fn format_date_iso(input: &DateInput) -> Result<String, DateError> {
    Ok(input.parse()?.format("%Y-%m-%d").to_string())
}

/// Relative description such as `3 days ago`, measured against `now`.
pub fn time_ago_from(input: &DateInput, now: DateTime<Utc>) -> Result<String, DateError> {
    let then = input.parse()?;
    let seconds = (now - then).num_milliseconds().div_euclid(1000);

    for (unit, unit_seconds) in TIME_AGO_UNITS {
        let count = seconds.div_euclid(unit_seconds);
        if count >= 1 {
            let plural = if count == 1 { "" } else { "s" };
            return Ok(format!("{} {}{} ago", count, unit, plural));
        }
    }
    Ok(JUST_NOW.to_string())
}

pub fn time_ago(input: &DateInput) -> Result<String, DateError> {
    time_ago_from(input, Utc::now())
}
