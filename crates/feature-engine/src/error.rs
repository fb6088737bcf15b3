//! Encoding Error Types

use thiserror::Error;

/// Errors raised while parsing categories or loading a scaler artifact
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodingError {
    /// Category value outside the closed set for its field
    #[error("Invalid {field} category: {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    /// Scaler array length differs from the feature dimension
    #[error("Scaler {field} has {actual} columns, expected {expected}")]
    ScalerShape {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Scaler was fitted on a different column order
    #[error("Scaler column {index} is {actual:?}, expected {expected:?}")]
    ColumnMismatch {
        index: usize,
        expected: &'static str,
        actual: String,
    },

    /// NaN or infinite scaler parameter
    #[error("Scaler {field} for {column} is not finite")]
    NonFinite {
        field: &'static str,
        column: &'static str,
    },

    /// Scaler artifact could not be read
    #[error("Failed to read scaler {path}: {reason}")]
    ScalerIo { path: String, reason: String },

    /// Scaler artifact is not valid JSON of the expected shape
    #[error("Invalid scaler artifact: {0}")]
    ScalerFormat(String),
}
