//! Structured details pulled from classified items for the slide renderer:
//! countdown length, hymn number and parsed scripture reference.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ClassifiedItem, SlideType};

/// Regex capturing the minutes of a `5 Minute Countdown` title.
#[allow(clippy::expect_used)]
static RE_MINUTES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)\s+minute\s+countdown").expect("valid regex: RE_MINUTES")
});

/// Regex matching `#510` style hymn numbers.
#[allow(clippy::expect_used)]
static RE_HASH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"#(\d+)").expect("valid regex: RE_HASH")
});

/// Regex matching `Hymn 510` or `Hymn #510` patterns.
#[allow(clippy::expect_used)]
static RE_HYMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)hymn\s*#?(\d+)").expect("valid regex: RE_HYMN")
});

/// Translation suffixes stripped before parsing a reference.
const VERSIONS: &[&str] = &["NRSVue", "NRSVUE", "NRSV", "NIV", "KJV", "ESV"];

/// A parsed scripture reference such as `Acts 3:11-19`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptureRef {
    /// Book name as written (e.g., "Acts", "1 John").
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// First verse; 1 when only a chapter is given.
    pub start_verse: u32,
    /// Last verse; `None` for a single verse or whole chapter.
    pub end_verse: Option<u32>,
}

impl ScriptureRef {
    /// Format as a display string (e.g., "Acts 3:11-19").
    pub fn display(&self) -> String {
        match self.end_verse {
            Some(end) => format!("{} {}:{}-{}", self.book, self.chapter, self.start_verse, end),
            None => format!("{} {}:{}", self.book, self.chapter, self.start_verse),
        }
    }
}

/// Parse the first reference of a string like `Isaiah 32:15-17; Luke 1:76-79 (NRSV)`.
///
/// Also accepts `Luke 2v1-20` and chapter-only `Psalm 23`.
pub fn parse_reference(input: &str) -> Option<ScriptureRef> {
    let first = input.split(';').next()?.split(',').next()?;
    let mut cleaned = first.split('(').next()?.trim();
    for version in VERSIONS {
        cleaned = cleaned.trim_end_matches(*version).trim();
    }

    let (book, chapter_verse) = cleaned.rsplit_once(char::is_whitespace)?;
    let book = book.trim();
    if book.is_empty() {
        return None;
    }

    let chapter_verse = chapter_verse.replace('v', ":");
    let Some((chapter, verses)) = chapter_verse.split_once(':') else {
        let chapter: u32 = chapter_verse.parse().ok()?;
        return Some(ScriptureRef { book: book.to_string(), chapter, start_verse: 1, end_verse: None });
    };

    let chapter: u32 = chapter.parse().ok()?;
    let (start_verse, end_verse): (u32, Option<u32>) = match verses.split_once('-') {
        Some((start, end)) => (start.parse().ok()?, Some(end.parse().ok()?)),
        None => (verses.parse().ok()?, None),
    };

    Some(ScriptureRef { book: book.to_string(), chapter, start_verse, end_verse })
}

/// Extract a hymn number from free text.
///
/// Recognizes patterns like `#510`, `Hymn #510`, `Hymn 510`.
pub fn hymn_number(text: &str) -> Option<u32> {
    RE_HASH
        .captures(text)
        .or_else(|| RE_HYMN.captures(text))
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

impl ClassifiedItem {
    /// Minutes of a `N Minute Countdown` item.
    pub fn countdown_minutes(&self) -> Option<u32> {
        if self.slide_type != SlideType::Countdown {
            return None;
        }
        RE_MINUTES
            .captures(&self.title)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Hymn number from the title, or failing that the content.
    pub fn hymn_number(&self) -> Option<u32> {
        if self.slide_type != SlideType::Hymn {
            return None;
        }
        hymn_number(&self.title).or_else(|| hymn_number(&self.content))
    }

    /// The scripture reference, parsed.
    pub fn scripture_ref(&self) -> Option<ScriptureRef> {
        self.reference.as_deref().and_then(parse_reference)
    }
}
