//! Per-line header detection.
//!
//! Decides whether a single line opens a new service item. Most rules look at
//! the line alone; the bare-title rule also peeks at the next raw line to tell
//! a short title from the first line of a paragraph.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::header::{
    LONG_BODY_LINE_LEN, MAX_BARE_TITLE_LEN, MAX_COLON_HEADER_LEN, MIN_SEPARATOR_LEN,
};

/// Service-element names that always mark a header, matched as lowercase substrings.
pub const KNOWN_HEADERS: &[&str] = &[
    "countdown",
    "opening praise",
    "closing praise",
    "announcements",
    "children's message",
    "children message",
    "call to worship",
    "opening prayer",
    "closing prayer",
    "hymn of praise",
    "scripture",
    "sermon",
    "message",
    "holy communion",
    "communion",
    "lord's prayer",
    "prayers for the community",
    "offering",
    "doxology",
    "dismissal",
    "benediction",
    "responsive reading",
    "liturgy",
];

/// Regex matching `5 Minute Countdown` style titles.
#[allow(clippy::expect_used)]
static RE_COUNTDOWN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\d+\s+minute\s+countdown").expect("valid regex: RE_COUNTDOWN")
});

/// Regex matching `Scripture: <reference>` titles.
#[allow(clippy::expect_used)]
static RE_SCRIPTURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^scripture:\s*.+").expect("valid regex: RE_SCRIPTURE")
});

/// Which header rule matched a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRule {
    /// Contains a known service-element name.
    KnownName,
    /// `<n> Minute Countdown`.
    Countdown,
    /// `Scripture: <reference>`.
    ScriptureRef,
    /// Short line ending in a colon.
    TrailingColon,
    /// Short capitalized line followed by body-looking text.
    BareTitle,
}

/// Classification of one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Formatting rule such as `~~~~`; dropped.
    Separator,
    /// Whitespace only; dropped.
    Blank,
    /// Opens a new item.
    Header(HeaderRule),
    /// Belongs to the current item.
    Content,
}

impl LineKind {
    /// True for [`LineKind::Header`].
    pub const fn is_header(self) -> bool {
        matches!(self, Self::Header(_))
    }
}

/// True for lines made only of `~`, `=` and `-`, at least three long.
pub fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() >= MIN_SEPARATOR_LEN
        && trimmed.chars().all(|c| matches!(c, '~' | '=' | '-'))
}

/// Classify `line` given the raw lines that follow it (at most a few; empty
/// at end of input).
pub fn classify_line(line: &str, lookahead: &[&str]) -> LineKind {
    let line = line.trim();

    if line.is_empty() {
        return LineKind::Blank;
    }
    if is_separator(line) {
        return LineKind::Separator;
    }

    header_rule(line, lookahead).map_or(LineKind::Content, LineKind::Header)
}

fn header_rule(line: &str, lookahead: &[&str]) -> Option<HeaderRule> {
    let lower = line.to_lowercase();
    let lower = lower.trim_end_matches(':');
    let len = line.chars().count();

    if KNOWN_HEADERS.iter().any(|name| lower.contains(name)) {
        return Some(HeaderRule::KnownName);
    }
    if RE_COUNTDOWN.is_match(line) {
        return Some(HeaderRule::Countdown);
    }
    if RE_SCRIPTURE.is_match(line) {
        return Some(HeaderRule::ScriptureRef);
    }
    if line.ends_with(':') && len < MAX_COLON_HEADER_LEN {
        return Some(HeaderRule::TrailingColon);
    }
    if looks_like_bare_title(line, len) && next_line_is_body(lookahead) {
        return Some(HeaderRule::BareTitle);
    }

    None
}

fn looks_like_bare_title(line: &str, len: usize) -> bool {
    line.starts_with(|c: char| c.is_ascii_uppercase())
        && len < MAX_BARE_TITLE_LEN
        && !line.contains(':')
        && !line.starts_with('-')
}

/// The bare-title rule only fires when there is a following line to look at.
fn next_line_is_body(lookahead: &[&str]) -> bool {
    let Some(next) = lookahead.first() else {
        return false;
    };
    let next = next.trim();

    next.is_empty()
        || next.starts_with('-')
        || next.starts_with("L:")
        || next.starts_with("P:")
        || next.starts_with('#')
        || next.chars().count() > LONG_BODY_LINE_LEN
}
