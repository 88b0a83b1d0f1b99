//! Core type definitions for a parsed order of service.
//!
//! [`ServiceItem`] is what the segmenter produces; [`ClassifiedItem`] adds the
//! slide type and scripture reference; [`ServiceDocument`] is the whole order
//! together with its document-level fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The semantic category of a service item, driving how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    /// Pre-service countdown timer.
    Countdown,
    /// Praise or worship song.
    Song,
    /// Numbered hymn.
    Hymn,
    /// Spoken prayer.
    Prayer,
    /// Bible reading.
    Scripture,
    /// Sermon or message.
    Sermon,
    /// Holy communion.
    Communion,
    /// Offering and doxology.
    Offering,
    /// Children's message.
    ChildrenMessage,
    /// Call and response liturgy.
    Liturgy,
    /// Dismissal or benediction.
    Dismissal,
    /// Generic text slides.
    #[default]
    Text,
}

impl SlideType {
    /// Returns all slide type variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Countdown,
            Self::Song,
            Self::Hymn,
            Self::Prayer,
            Self::Scripture,
            Self::Sermon,
            Self::Communion,
            Self::Offering,
            Self::ChildrenMessage,
            Self::Liturgy,
            Self::Dismissal,
            Self::Text,
        ]
    }

    /// Returns the interchange name of this slide type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Countdown => "countdown",
            Self::Song => "song",
            Self::Hymn => "hymn",
            Self::Prayer => "prayer",
            Self::Scripture => "scripture",
            Self::Sermon => "sermon",
            Self::Communion => "communion",
            Self::Offering => "offering",
            Self::ChildrenMessage => "children_message",
            Self::Liturgy => "liturgy",
            Self::Dismissal => "dismissal",
            Self::Text => "text",
        }
    }

    /// Background image the slide renderer pairs with this type.
    #[must_use]
    pub const fn background_file(self) -> &'static str {
        match self {
            Self::Countdown => "countdown.jpg",
            Self::Song => "song.jpg",
            Self::Hymn => "hymn.jpg",
            Self::Prayer => "prayer.jpg",
            Self::Scripture => "scripture.jpg",
            Self::Sermon => "sermon.jpg",
            Self::Communion => "communion.jpg",
            Self::Offering => "offering.jpg",
            Self::ChildrenMessage => "children.jpg",
            Self::Liturgy => "liturgy.jpg",
            Self::Dismissal | Self::Text => "general.jpg",
        }
    }
}

impl fmt::Display for SlideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SlideType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| format!("unknown slide type: {s}"))
    }
}

/// Optional per-item fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Person credited with leading the item (from a `-Name` line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter: Option<String>,
    /// Speaker named on the item; only present in loaded documents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

impl ItemMetadata {
    /// True when no metadata field is set.
    pub const fn is_empty(&self) -> bool {
        self.presenter.is_none() && self.speaker.is_none()
    }
}

/// One segment of the order of service, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    /// Header text without trailing colon; never empty.
    pub title: String,
    /// Body lines joined with `\n`, trimmed; may be empty.
    pub content: String,
    /// Presenter and similar fields.
    pub metadata: ItemMetadata,
}

/// A [`ServiceItem`] with its slide type assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedItem {
    /// Semantic category.
    #[serde(rename = "type")]
    pub slide_type: SlideType,
    /// Header text.
    pub title: String,
    /// Presenter and similar fields.
    #[serde(flatten)]
    pub metadata: ItemMetadata,
    /// Scripture reference; only set for [`SlideType::Scripture`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Body text.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub content: String,
}

impl ClassifiedItem {
    /// Presenter if present, otherwise speaker.
    pub fn presenter_name(&self) -> Option<&str> {
        self.metadata
            .presenter
            .as_deref()
            .or(self.metadata.speaker.as_deref())
    }
}

/// The whole parsed order of service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDocument {
    /// Service date as `YYYY-MM-DD`.
    pub date: String,
    /// Service theme.
    pub theme: String,
    /// Document-level speaker, if named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    /// Items in presentation order.
    #[serde(rename = "order")]
    pub items: Vec<ClassifiedItem>,
}
