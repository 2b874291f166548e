//! Style parsing errors

use thiserror::Error;

/// Errors raised while parsing CSS-like style values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("Invalid length: {0:?}")]
    InvalidLength(String),

    #[error("Invalid edges (expected 1-4 lengths): {0:?}")]
    InvalidEdges(String),

    #[error("Invalid border (expected \"<width> <style> <color>\"): {0:?}")]
    InvalidBorder(String),
}
