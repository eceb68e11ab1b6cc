//! Data error types.

use thiserror::Error;

/// Dataset loading and validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataError {
    /// The dataset could not be opened or read
    #[error("Failed to read dataset '{path}': {reason}")]
    Io { path: String, reason: String },

    /// A required column is absent from the header
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A non-null value in a used column is not numeric
    #[error("Parse error at row {row}, column '{column}': {value:?} is not a number")]
    ParseError {
        row: usize,
        column: String,
        value: String,
    },

    /// Invalid date format
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Feature vector has the wrong arity
    #[error("Expected {expected} features, got {actual}")]
    FeatureCount { expected: usize, actual: usize },

    /// Malformed CSV structure
    #[error("CSV error: {0}")]
    Csv(String),

    /// No complete rows remained after dropping incomplete ones
    #[error("No data returned")]
    NoData,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
