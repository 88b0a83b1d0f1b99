//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Header detection thresholds used by the line classifier.
pub mod header {
    /// Lines ending in `:` shorter than this are headers.
    pub const MAX_COLON_HEADER_LEN: usize = 50;

    /// Untagged title lines must be shorter than this.
    pub const MAX_BARE_TITLE_LEN: usize = 40;

    /// A following line longer than this reads as body text.
    pub const LONG_BODY_LINE_LEN: usize = 60;

    /// Number of raw lines handed to the classifier as lookahead.
    pub const LOOKAHEAD: usize = 3;

    /// Minimum run of `~`, `=` or `-` that forms a separator line.
    pub const MIN_SEPARATOR_LEN: usize = 3;
}

/// Document-level defaults.
pub mod document {
    /// Literal marker introducing the order-of-service section.
    pub const SECTION_MARKER: &str = "Order of Service";

    /// Theme used when the document has no `Theme:` field.
    pub const DEFAULT_THEME: &str = "Sunday Service";

    /// Date format of the `Service Date:` field.
    pub const SOURCE_DATE_FORMAT: &str = "%B %d, %Y";

    /// Date format written to the interchange document.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Interchange emitter layout.
pub mod emit {
    /// Content longer than this is written as a block literal.
    pub const MAX_INLINE_CONTENT_LEN: usize = 60;

    /// Indentation of keys inside an `order` entry.
    pub const ITEM_INDENT: &str = "    ";

    /// Indentation of block-literal content lines.
    pub const BLOCK_INDENT: &str = "      ";
}

/// Output defaults.
pub mod output {
    /// Default directory for converted service orders.
    pub const DEFAULT_OUTPUT_DIR: &str = "service_orders";

    /// Default log filter.
    pub const DEFAULT_LOG_LEVEL: &str = "info";

    /// Extension of written interchange documents.
    pub const ORDER_EXTENSION: &str = "yaml";

    /// Source file extensions picked up when walking a directory.
    pub const SOURCE_EXTENSIONS: &[&str] = &["txt", "docx"];
}
