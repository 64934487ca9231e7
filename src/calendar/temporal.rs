//! Parsing of the free-form start/end strings found in event listings.
//
// Every candidate format is tried in a fixed order and the first one that
// consumes the whole input wins. Date-only formats always go first, so an
// all-day value can never be shadowed by a date-time format.

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Formats that produce an all-day value.
const DATE_FORMATS: &[&str] = &[
    // Thu Nov 8 2018
    "%a %b %d %Y",
    // Nov 8 2018
    "%b %d %Y",
];

/// Formats that produce a timed value. None of them carries seconds.
const DATE_TIME_FORMATS: &[&str] = &[
    // Wed Nov 7 14:35 2018
    "%a %b %d %H:%M %Y",
    // Nov 7 14:35 2018
    "%b %d %H:%M %Y",
    // Nov 7 2:35PM 2018
    "%b %d %I:%M%p %Y",
    // 11/7/2018 2:35PM
    "%m/%d/%Y %I:%M%p",
];

/// A string that matched none of the supported date or date-time formats.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error: {value}")]
pub struct DateParseError {
    /// The input exactly as it was handed to the parser
    pub value: String,
}

impl DateParseError {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Start or end of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalValue {
    /// All-day boundary, serialized as `YYYYMMDD`
    DateOnly(NaiveDate),
    /// Floating local time with second resolution, serialized as `YYYYMMDDTHHMMSS`
    DateTime(NaiveDateTime),
}

impl TemporalValue {
    pub fn is_all_day(&self) -> bool {
        matches!(self, TemporalValue::DateOnly(_))
    }

    /// Returns the iCalendar stamp for this value.
    pub fn to_stamp(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::DateOnly(date) => write!(f, "{}", date.format("%Y%m%d")),
            TemporalValue::DateTime(dt) => write!(f, "{}", dt.format("%Y%m%dT%H%M%S")),
        }
    }
}

impl FromStr for TemporalValue {
    type Err = DateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_temporal(s)
    }
}

/// Parse a date or date-time string into a [`TemporalValue`].
///
/// Date-only formats are tried first and yield [`TemporalValue::DateOnly`];
/// otherwise the date-time formats are tried and yield
/// [`TemporalValue::DateTime`] with seconds at zero. The whole input must match
/// a format, with at least one whitespace character between its fields. Day
/// and hour numerals may be written with one or two digits; years always take
/// four. A leading weekday name is accepted without being checked against the
/// date.
///
/// # Examples
///
/// ```
/// use csv2ics::calendar::parse_temporal;
///
/// assert_eq!(parse_temporal("Nov 1 2018").unwrap().to_stamp(), "20181101");
/// assert_eq!(parse_temporal("11/7/2018 2:35PM").unwrap().to_stamp(), "20181107T143500");
/// assert!(parse_temporal("foo").is_err());
/// ```
pub fn parse_temporal(value: &str) -> Result<TemporalValue, DateParseError> {
    for fmt in DATE_FORMATS {
        let Some((text, fmt)) = align(value, fmt) else { continue };
        if let Ok(date) = NaiveDate::parse_from_str(&text, &fmt) {
            debug!("Parsed '{}' as a date with format '{}'", value, fmt);
            return Ok(TemporalValue::DateOnly(date));
        }
    }

    for fmt in DATE_TIME_FORMATS {
        let Some((text, fmt)) = align(value, fmt) else { continue };
        if let Ok(dt) = NaiveDateTime::parse_from_str(&text, &fmt) {
            debug!("Parsed '{}' as a date-time with format '{}'", value, fmt);
            return Ok(TemporalValue::DateTime(dt));
        }
    }

    Err(DateParseError::new(value))
}

/// Line `value` up against `format` one whitespace-separated token at a time.
///
/// Returns the input and format with the weekday token removed and single
/// spaces between the remaining tokens, or `None` when the token counts
/// differ, the weekday is not a weekday name, or a year is not four digits.
/// The weekday is only checked for spelling, never against the date.
fn align(value: &str, format: &str) -> Option<(String, String)> {
    if value.trim() != value {
        return None;
    }

    let tokens: Vec<&str> = value.split_whitespace().collect();
    let fmt_tokens: Vec<&str> = format.split(' ').collect();
    if tokens.len() != fmt_tokens.len() {
        return None;
    }

    let mut text = Vec::with_capacity(tokens.len());
    let mut fmt = Vec::with_capacity(tokens.len());
    for (token, fmt_token) in tokens.into_iter().zip(fmt_tokens) {
        if fmt_token == "%a" {
            if !WEEKDAYS.iter().any(|day| day.eq_ignore_ascii_case(token)) {
                return None;
            }
            continue;
        }
        if !has_four_digit_year(token, fmt_token) {
            return None;
        }
        text.push(token);
        fmt.push(fmt_token);
    }

    Some((text.join(" "), fmt.join(" ")))
}

const WEEKDAYS: &[&str] = &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A `%Y` always closes its format token; the input token must end in exactly
/// four ASCII digits preceded by the same separator as the format.
fn has_four_digit_year(token: &str, fmt_token: &str) -> bool {
    let Some(lead) = fmt_token.strip_suffix("%Y") else {
        return true;
    };
    let Some(split) = token.len().checked_sub(4) else {
        return false;
    };
    if !token.is_char_boundary(split) {
        return false;
    }

    let (head, year) = token.split_at(split);
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match lead.chars().last() {
        None => head.is_empty(),
        Some(separator) => head.ends_with(separator),
    }
}
