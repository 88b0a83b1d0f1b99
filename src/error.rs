//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.
//! Parse-level problems inside a service order are not errors; those are
//! reported as [`crate::order::ParseWarning`] values.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Interchange document parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Source document (`.docx`) could not be opened or read
    #[error("Document error in {path:?}: {message}")]
    Document {
        /// The document being extracted.
        path: PathBuf,
        /// Description of the extraction failure.
        message: String,
    },

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a document extraction error
    pub fn document(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Document { path: path.into(), message: message.into() }
    }

    /// Attach a file path to a parse error that was raised without one.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Parse { file: None, message } => Self::Parse { file: Some(path.into()), message },
            Self::Io { source, path: None } => Self::Io { source, path: Some(path.into()) },
            other => other,
        }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse { file: None, message: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn with_file_fills_missing_parse_path() {
        let err = Error::parse("bad order", None).with_file("2025-06-22.yaml");
        match err {
            Error::Parse { file: Some(f), .. } => assert_eq!(f, PathBuf::from("2025-06-22.yaml")),
            _ => panic!("Expected Parse error with file"),
        }
    }

    #[test]
    fn with_file_keeps_existing_path() {
        let err = Error::parse("bad order", PathBuf::from("a.yaml")).with_file("b.yaml");
        match err {
            Error::Parse { file: Some(f), .. } => assert_eq!(f, PathBuf::from("a.yaml")),
            _ => panic!("Expected Parse error with original file"),
        }
    }

    #[test]
    fn with_file_fills_missing_io_path() {
        let err = Error::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).with_file("bulletin.txt");
        match err {
            Error::Io { path: Some(p), .. } => assert_eq!(p, PathBuf::from("bulletin.txt")),
            _ => panic!("Expected Io error with path"),
        }
    }

    #[test]
    fn config_error_displays_hint() {
        let err = Error::config("Output directory is a file", "Set ORDERFLOW_OUTPUT_DIR to a directory");
        assert!(err.to_string().contains("ORDERFLOW_OUTPUT_DIR"));
    }
}
