//! Format validators for dates, passports and visas
//!
//! All validators return `bool`: malformed input is an ordinary `false`,
//! never an error.

use chrono::{Duration, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

const DATE_FORMAT: &str = "%Y-%m-%d";

macro_rules! format_pattern {
    ($name:ident, $regex_str:expr) => {
        static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// `YYYY-MM-DD` with exactly 4/2/2 ASCII digits
format_pattern!(RE_DATE, r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$");

// Five groups of five word characters
format_pattern!(RE_PASSPORT, r"^\w{5}-\w{5}-\w{5}-\w{5}-\w{5}$");

// Two groups of five word characters
format_pattern!(RE_VISA, r"^\w{5}-\w{5}$");

fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

/// Parse a `YYYY-MM-DD` calendar date
///
/// The shape is checked before chrono sees the string, so single-digit
/// months or days and signed years are refused.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    if !matches(&RE_DATE, date) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Returns true if `date` is a real calendar date in `YYYY-MM-DD` form
pub fn valid_date_format(date: &str) -> bool {
    parse_date(date).is_some()
}

/// Returns true if `passport` is five groups of five word characters separated by dashes
pub fn valid_passport_format(passport: &str) -> bool {
    matches(&RE_PASSPORT, passport)
}

/// Returns true if `code` is two groups of five word characters separated by a dash
pub fn valid_visa_format(code: &str) -> bool {
    matches(&RE_VISA, code)
}

/// Returns true if `issued` lies strictly within `window` of `today`, in either direction
pub fn issued_within(issued: NaiveDate, today: NaiveDate, window: Duration) -> bool {
    (today - issued).num_days().abs() < window.num_days()
}

/// Full visa check: code format, issue date format, and recency
pub fn valid_visa(code: &str, issued: &str, today: NaiveDate, window: Duration) -> bool {
    if !valid_visa_format(code) {
        return false;
    }
    match parse_date(issued) {
        Some(issued) => issued_within(issued, today, window),
        None => false,
    }
}
