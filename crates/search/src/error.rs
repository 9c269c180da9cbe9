//! Error types for the search crate.
//!
//! Matching itself is infallible; these cover loading configuration and
//! decoding JSON records.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur around search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration file could not be read, parsed, or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Records were not a JSON array of objects
    #[error("Invalid items: {0}")]
    InvalidItems(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Error code for integration with tooling that reports numeric codes.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Configuration error
    Config = 11001,
    /// Invalid items
    InvalidItems = 11002,
    /// JSON parsing error
    JsonParsing = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::Config(_) => SearchErrorCode::Config,
            SearchError::InvalidItems(_) => SearchErrorCode::InvalidItems,
            SearchError::JsonError(_) => SearchErrorCode::JsonParsing,
        }
    }
}
