use thiserror::Error;

/// Errors returned by the outlier filters and the dataset substrate.
///
/// Every variant is a permanent failure: the filters are pure, so retrying
/// with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OutlierError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("column '{column}' is not numeric: row {row} holds a {found} value")]
    NonNumericColumn {
        column: String,
        row: usize,
        found: &'static str,
    },

    #[error("log scale requires values > -1, column '{column}' row {row} holds {value}")]
    InvalidLogDomain {
        column: String,
        row: usize,
        value: f64,
    },

    #[error("invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, OutlierError>;
