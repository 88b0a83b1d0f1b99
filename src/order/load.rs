//! Interchange document reader.
//!
//! Accepts documents written by [`super::emit`] as well as hand-edited ones
//! that use the older `service_order` key.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::types::{ClassifiedItem, ItemMetadata, ServiceDocument, SlideType};

#[derive(Debug, Deserialize)]
struct RawDocument {
    date: String,
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default, alias = "service_order")]
    order: Option<Vec<RawItem>>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(rename = "type", default)]
    slide_type: SlideType,
    title: String,
    #[serde(default)]
    presenter: Option<String>,
    #[serde(default)]
    speaker: Option<String>,
    #[serde(default)]
    reference: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl ServiceDocument {
    /// Parse an interchange document.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let raw: RawDocument = serde_yaml::from_str(text)?;

        let items = raw
            .order
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.into_classified(i))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            date: raw.date,
            theme: raw.theme.unwrap_or_default(),
            speaker: raw.speaker.filter(|s| !s.is_empty()),
            items,
        })
    }
}

impl RawItem {
    fn into_classified(self, index: usize) -> Result<ClassifiedItem> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::parse(format!("order item {} has an empty title", index + 1), None));
        }

        Ok(ClassifiedItem {
            slide_type: self.slide_type,
            title,
            metadata: ItemMetadata {
                presenter: self.presenter,
                speaker: self.speaker,
            },
            reference: self.reference,
            // Block literals keep their final newline.
            content: self.content.map(|c| c.trim().to_string()).unwrap_or_default(),
        })
    }
}
