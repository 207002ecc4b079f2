//! Human-readable dates and date ranges.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Error, Result};

/// Literal used for the end of an ongoing range.
pub const PRESENT: &str = "Present";

/// Datetimes without an offset.
const LOCAL_DATETIME_PATTERNS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// How the month is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    /// Full month name ("March 2022")
    #[default]
    Long,
    /// Abbreviated month name ("Mar 2022")
    Short,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Long => "%B %Y",
            DateStyle::Short => "%b %Y",
        }
    }
}

/// Parse an ISO-style date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, RFC 3339 timestamps, and local
/// `YYYY-MM-DDTHH:MM[:SS[.f]]` datetimes. A missing month or day defaults to
/// the first.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.date_naive());
    }

    for pattern in LOCAL_DATETIME_PATTERNS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(dt.date());
        }
    }

    let parts: Vec<&str> = value.split('-').collect();
    let (year, month, day) = match parts.as_slice() {
        [y] => (*y, "1", "1"),
        [y, m] => (*y, *m, "1"),
        [y, m, d] => (*y, *m, *d),
        _ => return Err(Error::InvalidDate(value.to_string())),
    };

    let parse = |s: &str| s.parse::<u32>().ok();
    match (year.parse::<i32>().ok(), parse(month), parse(day)) {
        (Some(y), Some(m), Some(d)) if year.len() == 4 => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    }
    .ok_or_else(|| Error::InvalidDate(value.to_string()))
}

/// Format a date as "Month Year". Absent or blank input gives an empty string.
///
/// Input that is not a recognizable date is returned unchanged so that free
/// text such as "Summer 2019" still renders.
pub fn format_date(date: Option<&str>, style: DateStyle) -> String {
    let Some(value) = date.map(str::trim).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    match parse_date(value) {
        Ok(parsed) => parsed.format(style.pattern()).to_string(),
        Err(_) => {
            log::warn!("Unrecognized date {:?}, rendering as-is", value);
            value.to_string()
        }
    }
}

/// Format the end of a range: absent means the entry is ongoing.
pub fn format_end_date(date: Option<&str>, style: DateStyle) -> String {
    let formatted = format_date(date, style);
    if formatted.is_empty() {
        PRESENT.to_string()
    } else {
        formatted
    }
}

/// Format `"{start}{separator}{end}"`, with "Present" for an absent end.
pub fn format_date_range(
    start: Option<&str>,
    end: Option<&str>,
    separator: &str,
    style: DateStyle,
) -> String {
    format!(
        "{}{}{}",
        format_date(start, style),
        separator,
        format_end_date(end, style)
    )
}
