//! Interchange document writer.
//!
//! The slide renderer reads a small YAML document with a fixed layout, so the
//! document is written line by line rather than through a generic serializer:
//! key order is fixed, short content is a quoted scalar and long or multi-line
//! content is a `|` block literal.

use std::fmt::Write;

use crate::constants::emit::{BLOCK_INDENT, ITEM_INDENT, MAX_INLINE_CONTENT_LEN};
use crate::types::{ClassifiedItem, ServiceDocument};

/// Characters that cannot start a plain YAML scalar.
const INDICATORS: &[char] = &[
    '-', '?', ':', ',', '[', ']', '{', '}', '#', '&', '*', '!', '|', '>', '\'', '"', '%', '@', '`',
];

/// Plain words YAML would read as something other than a string.
const RESERVED: &[&str] = &["true", "false", "yes", "no", "on", "off", "y", "n", "null", "~"];

/// Render the whole document.
pub fn to_interchange(doc: &ServiceDocument) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "date: {}", scalar(&doc.date));
    let _ = writeln!(out, "theme: {}", scalar(&doc.theme));
    if let Some(speaker) = doc.speaker.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "speaker: {}", scalar(speaker));
    }
    out.push('\n');
    out.push_str("order:\n");

    for item in &doc.items {
        write_item(&mut out, item);
    }

    out
}

fn write_item(out: &mut String, item: &ClassifiedItem) {
    let _ = writeln!(out, "  - type: {}", item.slide_type);
    let _ = writeln!(out, "{ITEM_INDENT}title: {}", scalar(&item.title));

    if let Some(presenter) = &item.metadata.presenter {
        let _ = writeln!(out, "{ITEM_INDENT}presenter: {}", scalar(presenter));
    } else if let Some(speaker) = &item.metadata.speaker {
        let _ = writeln!(out, "{ITEM_INDENT}speaker: {}", scalar(speaker));
    }

    if let Some(reference) = &item.reference {
        let _ = writeln!(out, "{ITEM_INDENT}reference: {}", scalar(reference));
    }

    if item.content.is_empty() {
        return;
    }

    if is_block(&item.content) {
        let _ = writeln!(out, "{ITEM_INDENT}content: |");
        for line in item.content.lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, "{BLOCK_INDENT}{line}");
            }
        }
    } else {
        let _ = writeln!(out, "{ITEM_INDENT}content: {}", quoted(&item.content));
    }
}

/// Multi-line or long content goes in a block literal, unless it holds a
/// character a block literal cannot carry.
pub fn is_block(content: &str) -> bool {
    (content.contains('\n') || content.chars().count() > MAX_INLINE_CONTENT_LEN)
        && content.chars().all(|c| c == '\n' || c == '\t' || is_plain_char(c))
}

/// Characters YAML reads back unchanged outside a quoted scalar.
///
/// Excludes control characters, the byte order mark and the Unicode line
/// breaks (U+0085, U+2028, U+2029), which a YAML reader treats as newlines.
const fn is_plain_char(c: char) -> bool {
    matches!(c,
        '\u{20}'..='\u{7e}'
        | '\u{a0}'..='\u{2027}'
        | '\u{202a}'..='\u{d7ff}'
        | '\u{e000}'..='\u{fefe}'
        | '\u{ff00}'..='\u{fffd}'
        | '\u{10000}'..='\u{10ffff}')
}

/// Write `value` plain when YAML reads it back unchanged, quoted otherwise.
pub fn scalar(value: &str) -> String {
    if needs_quotes(value) {
        quoted(value)
    } else {
        value.to_string()
    }
}

fn needs_quotes(value: &str) -> bool {
    let Some(first) = value.chars().next() else {
        return true;
    };

    first.is_whitespace()
        || value.ends_with(char::is_whitespace)
        || INDICATORS.contains(&first)
        || value.contains(": ")
        || value.contains(" #")
        || value.ends_with(':')
        || !value.chars().all(is_plain_char)
        || RESERVED.contains(&value.to_lowercase().as_str())
        || value.parse::<f64>().is_ok()
}

/// Double-quoted YAML scalar.
pub fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{85}' => out.push_str("\\N"),
            '\u{2028}' => out.push_str("\\L"),
            '\u{2029}' => out.push_str("\\P"),
            c if !is_plain_char(c) => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
