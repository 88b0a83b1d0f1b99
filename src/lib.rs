//! `orderflow` - order-of-service text to slide-order converter.
//!
//! This crate reads the plain text of a weekly service bulletin, finds the
//! "Order of Service" section, splits it into titled items, classifies each
//! item (song, prayer, scripture, ...) and writes the YAML interchange
//! document the slide renderer consumes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod order;
pub mod source;
pub mod types;

pub use error::{Error, Result};
pub use order::{parse_document, parse_document_on, ParseOutcome, ParseWarning};
pub use types::{ClassifiedItem, ItemMetadata, ServiceDocument, ServiceItem, SlideType};
