//! Order-of-service parsing pipeline.
//!
//! Raw text goes through two independent passes: the field extractors read
//! the document-level date, theme and speaker from anywhere in the text, and
//! the segmenter splits the text after the `Order of Service` marker into
//! items, which are then classified. Nothing here fails; problems are
//! recovered with a default and reported as [`ParseWarning`]s.

pub mod classify;
pub mod details;
pub mod emit;
pub mod fields;
pub mod line;
pub mod load;
pub mod segmenter;

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use thiserror::Error;

use crate::constants::document::SECTION_MARKER;
use crate::types::ServiceDocument;
use fields::DateField;

pub use classify::classify;
pub use details::ScriptureRef;
pub use emit::to_interchange;
pub use segmenter::{segment, Segmenter};

/// Case-insensitive section marker.
#[allow(clippy::expect_used)]
static RE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i){}", regex::escape(SECTION_MARKER))).expect("valid regex: RE_MARKER")
});

/// A recovered problem found while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// No `Order of Service` marker; the order is empty.
    #[error("could not find the 'Order of Service' section")]
    MissingSection,
    /// No `Service Date:` field; the processing date was used.
    #[error("no service date found, using {fallback}")]
    MissingDate {
        /// Date used instead.
        fallback: String,
    },
    /// `Service Date:` present but not a valid date; the processing date was used.
    #[error("could not parse service date {raw:?}, using {fallback}")]
    UnparsableDate {
        /// Text found after `Service Date:`.
        raw: String,
        /// Date used instead.
        fallback: String,
    },
}

/// A parsed document together with the warnings raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    /// The parsed order of service.
    pub document: ServiceDocument,
    /// Recovered problems, in the order they were found.
    pub warnings: Vec<ParseWarning>,
}

impl ParseOutcome {
    /// False when the marker was missing, meaning "no order found" rather
    /// than an empty order.
    pub fn has_order(&self) -> bool {
        !self.warnings.contains(&ParseWarning::MissingSection)
    }
}

/// Text following the first case-insensitive `Order of Service` marker.
pub fn order_section(text: &str) -> Option<&str> {
    RE_MARKER.find(text).map(|m| &text[m.end()..])
}

/// Parse a whole document, using `today` when the service date is unusable.
pub fn parse_document_on(text: &str, today: NaiveDate) -> ParseOutcome {
    let mut warnings = Vec::new();

    let date = match fields::service_date(text) {
        DateField::Parsed(date) => fields::iso_date(date),
        DateField::Unparsable(raw) => {
            let fallback = fields::iso_date(today);
            warnings.push(ParseWarning::UnparsableDate { raw, fallback: fallback.clone() });
            fallback
        }
        DateField::Missing => {
            let fallback = fields::iso_date(today);
            warnings.push(ParseWarning::MissingDate { fallback: fallback.clone() });
            fallback
        }
    };

    let items = order_section(text).map_or_else(
        || {
            warnings.push(ParseWarning::MissingSection);
            Vec::new()
        },
        |section| segment(section).into_iter().map(classify).collect(),
    );

    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    ParseOutcome {
        document: ServiceDocument {
            date,
            theme: fields::theme(text),
            speaker: fields::speaker(text),
            items,
        },
        warnings,
    }
}

/// Parse a whole document, falling back to the local date.
pub fn parse_document(text: &str) -> ParseOutcome {
    parse_document_on(text, Local::now().date_naive())
}
