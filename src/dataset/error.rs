//! Dataset error types

use thiserror::Error;

/// Errors raised while assembling a [`Dataset`](super::Dataset)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A dataset needs at least one column
    #[error("Dataset has no columns")]
    Empty,

    /// Columns disagree on the number of rows
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// The key column does not exist
    #[error("Unknown key column: {0}")]
    UnknownColumn(String),

    /// The key column contains a repeated value
    #[error("Duplicate key '{value}' in column '{column}'")]
    DuplicateKey { column: String, value: String },
}

/// Result type for dataset construction
pub type SchemaResult<T> = Result<T, SchemaError>;
