//! Render error types

use thiserror::Error;

/// Errors that can occur while rendering the page
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// A style or theme value has no valid CSS encoding
    #[error("Unserializable style value for '{property}': {value:?}")]
    UnserializableStyle { property: String, value: String },

    /// A chart figure could not be encoded as JSON
    #[error("Figure encoding error: {0}")]
    Figure(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Figure(err.to_string())
    }
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
