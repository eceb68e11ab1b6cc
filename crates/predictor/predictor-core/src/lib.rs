//! Predictor Core
//!
//! Fits the scaler, tree and forecaster once, then serves blended
//! predictions from them.
//!
//! - [`training`]: one-shot training step producing [`TrainedModels`]
//! - [`service`]: [`PredictionService`], the [`RatePredictor`] implementation
//! - [`blend`]: clamping, weighting and rounding helpers

pub mod blend;
pub mod service;
pub mod training;

// Re-export SPI types for implementations
pub use predictor_spi::{
    ModelSummary, PredictionRequest, PredictionResponse, PredictorError, RatePredictor, Result,
    TreeMetrics, TreeSummary,
};

pub use service::PredictionService;
pub use training::TrainedModels;
