//! Document-level field extraction (service date, theme, speaker).

// Allow expect for compile-time constant regex patterns in lazy_static blocks
#![allow(clippy::expect_used)]

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::constants::document::{DEFAULT_THEME, ISO_DATE_FORMAT, SOURCE_DATE_FORMAT};

lazy_static! {
    static ref RE_DATE: Regex = Regex::new(r"(?i)Service Date:\s*([A-Za-z]+\s+\d{1,2},\s+\d{4})")
        .expect("valid regex: RE_DATE");
    static ref RE_DATE_LABEL: Regex = Regex::new(r"(?i)Service Date:[ \t]*([^\n]*)")
        .expect("valid regex: RE_DATE_LABEL");
    static ref RE_THEME: Regex = Regex::new(r"(?i)Theme:\s*(.+?)(?:\n|Speaker:|~)")
        .expect("valid regex: RE_THEME");
    static ref RE_SPEAKER: Regex = Regex::new(r"(?i)Speaker:\s*(.+?)(?:\n|~)")
        .expect("valid regex: RE_SPEAKER");
}

/// Outcome of looking for the `Service Date:` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateField {
    /// Found and parsed.
    Parsed(NaiveDate),
    /// Found but not a real `<Month> <Day>, <Year>` date.
    Unparsable(String),
    /// Not present.
    Missing,
}

/// Find and parse `Service Date: June 22, 2025`.
///
/// The month must be spelled out; `Oct 5, 2025` is unparsable. A label
/// followed by anything else (`6/22/2025`, `Sunday`) is unparsable too, and
/// only a document without the label at all is `Missing`.
pub fn service_date(text: &str) -> DateField {
    if let Some(raw) = RE_DATE.captures(text).and_then(|c| c.get(1)) {
        return parse_long_date(raw.as_str())
            .map_or_else(|| DateField::Unparsable(raw.as_str().to_string()), DateField::Parsed);
    }

    RE_DATE_LABEL
        .captures(text)
        .and_then(|c| c.get(1))
        .map_or(DateField::Missing, |raw| DateField::Unparsable(raw.as_str().trim().to_string()))
}

fn parse_long_date(raw: &str) -> Option<NaiveDate> {
    let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let date = NaiveDate::parse_from_str(&normalized, SOURCE_DATE_FORMAT).ok()?;

    // chrono's %B also takes abbreviations
    let month = normalized.split(' ').next()?;
    date.format("%B").to_string().eq_ignore_ascii_case(month).then_some(date)
}

/// Format a date the way the interchange document stores it.
pub fn iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// The `Theme:` value, or the default theme.
pub fn theme(text: &str) -> String {
    capture_trimmed(&RE_THEME, text).unwrap_or_else(|| DEFAULT_THEME.to_string())
}

/// The `Speaker:` value, if present and non-empty.
pub fn speaker(text: &str) -> Option<String> {
    capture_trimmed(&RE_SPEAKER, text)
}

fn capture_trimmed(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty())
}
