//! Error types for the text front end.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for symbol tables, cleaners, phonemizers and codecs.
///
/// Tolerant conditions (an unknown symbol while encoding, an out-of-range ID
/// while decoding) are not represented here: they are skipped and counted.
#[derive(Error, Debug)]
pub enum TextError {
    /// Malformed symbol configuration, unknown cleaner, empty table
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// No phonemizer or segmenter is registered for the language
    #[error("Language {0} is not supported")]
    UnsupportedLanguage(String),

    /// Symbol string missing from a table
    #[error("Unknown symbol: {0:?}")]
    UnknownSymbol(String),

    /// Symbol ID missing from a table
    #[error("Unknown symbol ID: {0}")]
    UnknownId(u32),

    /// Phonemizer backend failure (dictionary load, bad entry)
    #[error("Phonemizer error: {0}")]
    Phonemizer(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TextError {
    /// Shorthand for a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for errors that stem from configuration and will not go away on retry.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::UnsupportedLanguage(_))
    }
}

/// Result type alias for text front-end operations.
pub type Result<T> = std::result::Result<T, TextError>;
