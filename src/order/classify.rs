//! Slide type classification.
//!
//! Rules live in an ordered table so that their priority is data: the first
//! rule whose keyword appears in the lowercased title wins. Titles often hold
//! several plausible keywords ("Sermon: The Good News", "Offering with
//! Doxology"), so the order matters.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ClassifiedItem, ServiceItem, SlideType};

/// Title keyword rules in priority order.
pub const TITLE_RULES: &[(&[&str], SlideType)] = &[
    (&["countdown"], SlideType::Countdown),
    (&["communion", "holy communion"], SlideType::Communion),
    (&["offering"], SlideType::Offering),
    (&["dismissal", "benediction"], SlideType::Dismissal),
    (&["children's message", "children message"], SlideType::ChildrenMessage),
    (&["sermon", "message"], SlideType::Sermon),
    (&["scripture", "reading"], SlideType::Scripture),
    (&["hymn", "#"], SlideType::Hymn),
    (&["praise", "song", "worship"], SlideType::Song),
    (&["prayer"], SlideType::Prayer),
    (&["call to worship", "responsive"], SlideType::Liturgy),
    (&["announcement"], SlideType::Text),
];

/// Call-and-response markers that make untitled content liturgy.
pub const LITURGY_MARKERS: &[&str] = &["L:", "P:", "Leader:"];

/// Regex capturing everything after the title's first colon.
#[allow(clippy::expect_used)]
static RE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":\s*(.+)$").expect("valid regex: RE_REFERENCE")
});

/// Pick the slide type for an item from its title, falling back to content.
pub fn slide_type(title: &str, content: &str) -> SlideType {
    let lower = title.to_lowercase();

    TITLE_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map_or_else(
            || {
                if LITURGY_MARKERS.iter().any(|m| content.contains(m)) {
                    SlideType::Liturgy
                } else {
                    SlideType::Text
                }
            },
            |&(_, slide_type)| slide_type,
        )
}

/// Reference text following the colon of a scripture title.
///
/// `"Scripture: Acts 3:11-19"` yields `"Acts 3:11-19"`; the split is at the
/// first colon so chapter:verse separators stay inside the reference.
pub fn scripture_reference(title: &str) -> Option<String> {
    RE_REFERENCE
        .captures(title)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|r| !r.is_empty())
}

/// Attach a slide type (and scripture reference) to a segmented item.
pub fn classify(item: ServiceItem) -> ClassifiedItem {
    let slide_type = slide_type(&item.title, &item.content);
    let reference = if slide_type == SlideType::Scripture {
        scripture_reference(&item.title)
    } else {
        None
    };

    ClassifiedItem {
        slide_type,
        title: item.title,
        metadata: item.metadata,
        reference,
        content: item.content,
    }
}
