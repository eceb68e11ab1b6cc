//! Forecast error types

use thiserror::Error;

/// Result type alias for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during forecasting operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Forecaster has not been fitted
    #[error("Forecaster must be fitted before forecasting")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// Regressor registered twice
    #[error("Regressor '{0}' is already registered")]
    DuplicateRegressor(String),

    /// Registered regressor absent from the data
    #[error("Regressor '{0}' is not present in the data")]
    UnknownRegressor(String),

    /// Wrong number of regressor values for a point
    #[error("Regressor mismatch: expected {expected} values, got {actual}")]
    RegressorMismatch { expected: usize, actual: usize },

    /// Malformed input series
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
