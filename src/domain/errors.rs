//! Domain error types
//!
//! This module defines the error hierarchy for the converter.
//! Errors from third-party crates are converted into domain variants so that
//! callers never match on tokenizer or CSV writer types directly.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the library.
/// Every variant is fatal for the conversion it occurs in.
#[derive(Debug, Error)]
pub enum AtenaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The input document could not be opened or read
    #[error("I/O error: {0}")]
    Io(String),

    /// The input document is not well-formed XML
    #[error("XML error at byte {position}: {message}")]
    Xml { position: u64, message: String },

    /// A start tag lacks the attribute at the position the export format places it
    #[error(
        "Element <{element}> has no attribute value at index {index} (only {found} attribute entries)"
    )]
    MissingAttribute {
        element: String,
        index: usize,
        found: usize,
    },

    /// Writing a row to the output failed
    #[error("Output error: {0}")]
    Output(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AtenaError {
    /// Whether the error comes from the input document rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AtenaError::Xml { .. } | AtenaError::MissingAttribute { .. }
        )
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for AtenaError {
    fn from(err: std::io::Error) -> Self {
        AtenaError::Io(err.to_string())
    }
}

// Conversion from csv writer errors
impl From<csv::Error> for AtenaError {
    fn from(err: csv::Error) -> Self {
        AtenaError::Output(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AtenaError {
    fn from(err: toml::de::Error) -> Self {
        AtenaError::Configuration(format!("TOML parse error: {err}"))
    }
}
