//! Chart builder error types

use thiserror::Error;

/// Errors that can occur while building a chart artifact
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A spec names a column the dataset does not have
    #[error("Unknown field '{field}' in chart '{chart}' (available: {available})")]
    UnknownField {
        chart: String,
        field: String,
        available: String,
    },

    /// The spec is incomplete or inconsistent for its chart kind
    #[error("Invalid spec for chart '{chart}': {reason}")]
    InvalidSpec { chart: String, reason: String },
}

/// Result type for chart builders
pub type ChartResult<T> = Result<T, ChartError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::UnknownField {
            chart: "Population by Region".to_string(),
            field: "Pop".to_string(),
            available: "Region, Population".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown field 'Pop' in chart 'Population by Region' (available: Region, Population)"
        );
    }
}
