//! Predictor error types

use algorithm_spi::ModelError;
use data_spi::DataError;
use forecast_spi::ForecastError;
use thiserror::Error;

/// Result type alias for prediction operations
pub type Result<T> = std::result::Result<T, PredictorError>;

/// Errors raised while training or serving predictions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictorError {
    /// Request carries the wrong number of features
    #[error("Expected {expected} features, got {actual}")]
    InvalidFeatureCount { expected: usize, actual: usize },

    /// Request date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Fitting the models failed
    #[error("Training failed: {0}")]
    Training(String),

    /// Evaluating a fitted model failed
    #[error("Model evaluation failed: {0}")]
    Model(String),

    /// Dataset could not be loaded
    #[error("Data error: {0}")]
    Data(DataError),
}

impl PredictorError {
    /// Whether the caller's input caused the error
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PredictorError::InvalidFeatureCount { .. } | PredictorError::InvalidDate(_)
        )
    }
}

impl From<DataError> for PredictorError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::FeatureCount { expected, actual } => {
                PredictorError::InvalidFeatureCount { expected, actual }
            }
            DataError::InvalidDate(value) => PredictorError::InvalidDate(value),
            other => PredictorError::Data(other),
        }
    }
}

impl From<ModelError> for PredictorError {
    fn from(err: ModelError) -> Self {
        PredictorError::Model(err.to_string())
    }
}

impl From<ForecastError> for PredictorError {
    fn from(err: ForecastError) -> Self {
        PredictorError::Model(err.to_string())
    }
}
