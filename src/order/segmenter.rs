//! Groups classified lines into service items.
//!
//! The segmenter is a two-state machine: before the first header it discards
//! everything, afterwards it accumulates content and presenter lines into the
//! open item until the next header or the end of input closes it.

use crate::constants::header::LOOKAHEAD;
use crate::order::line::{classify_line, LineKind};
use crate::types::{ItemMetadata, ServiceItem};

/// An item that has seen its header but not yet been closed.
#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenItem {
    title: String,
    lines: Vec<String>,
    metadata: ItemMetadata,
}

impl OpenItem {
    fn close(self) -> ServiceItem {
        ServiceItem {
            title: self.title,
            content: self.lines.join("\n").trim().to_string(),
            metadata: self.metadata,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum State {
    #[default]
    NoActiveItem,
    BuildingItem(OpenItem),
}

/// Line-at-a-time item builder.
#[derive(Debug, Clone, Default)]
pub struct Segmenter {
    state: State,
    items: Vec<ServiceItem>,
}

impl Segmenter {
    /// Create a segmenter with no open item.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an item is open.
    pub const fn is_building(&self) -> bool {
        matches!(self.state, State::BuildingItem(_))
    }

    /// Items closed so far.
    pub fn items(&self) -> &[ServiceItem] {
        &self.items
    }

    /// Close any open item and start a new one titled from `line`.
    ///
    /// A header whose title is empty once the colon is stripped (a lone `:`)
    /// opens nothing, so content up to the next header is dropped.
    pub fn push_header(&mut self, line: &str) {
        self.close_open_item();

        let title = line.trim().trim_end_matches(':').trim();
        if title.is_empty() {
            return;
        }

        self.state = State::BuildingItem(OpenItem {
            title: title.to_string(),
            lines: Vec::new(),
            metadata: ItemMetadata::default(),
        });
    }

    /// Add a content line to the open item; ignored when no item is open.
    pub fn push_content(&mut self, line: &str) {
        let State::BuildingItem(item) = &mut self.state else {
            return;
        };

        let stripped = line.trim();
        if stripped.starts_with('-') {
            let presenter = stripped.trim_start_matches('-').trim();
            item.metadata.presenter = Some(presenter.to_string());
        } else if !stripped.is_empty() {
            item.lines.push(line.trim_end().to_string());
        }
    }

    /// Close the last item and return everything collected.
    pub fn finish(mut self) -> Vec<ServiceItem> {
        self.close_open_item();
        self.items
    }

    fn close_open_item(&mut self) {
        if let State::BuildingItem(item) = std::mem::take(&mut self.state) {
            let item = item.close();
            tracing::debug!("Parsed item: {}", item.title);
            self.items.push(item);
        }
    }
}

/// Segment the text that follows the order-of-service marker.
pub fn segment(section: &str) -> Vec<ServiceItem> {
    let lines: Vec<&str> = section.trim().lines().map(str::trim_end).collect();
    let mut segmenter = Segmenter::new();

    for (i, line) in lines.iter().enumerate() {
        let end = (i + 1 + LOOKAHEAD).min(lines.len());
        let lookahead = &lines[i + 1..end];

        match classify_line(line, lookahead) {
            LineKind::Separator | LineKind::Blank => {}
            LineKind::Header(rule) => {
                tracing::trace!("Header ({rule:?}): {line}");
                segmenter.push_header(line);
            }
            LineKind::Content => segmenter.push_content(line),
        }
    }

    segmenter.finish()
}
