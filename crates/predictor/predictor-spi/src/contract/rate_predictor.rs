//! Rate predictor trait

use crate::error::Result;
use crate::model::{ModelSummary, PredictionRequest, PredictionResponse};

/// Serves blended predictions from models fitted once at startup
///
/// Implementations are read-only after construction and shared across
/// request handlers.
pub trait RatePredictor: Send + Sync {
    /// Predict the rate for one request.
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse>;

    /// Describe the fitted models.
    fn summary(&self) -> ModelSummary;
}
