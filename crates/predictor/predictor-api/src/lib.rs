//! Predictor Consumer API
//!
//! Configuration for the training step and the blend, plus re-exports of the
//! SPI contract and models.

pub mod config;

pub use config::{BlendConfig, PrecisionConfig, PredictorConfig, PredictorConfigBuilder};

// Re-export traits from SPI
pub use predictor_spi::{
    ModelSummary, PredictionRequest, PredictionResponse, PredictorError, RatePredictor, Result,
    TreeMetrics, TreeSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BlendConfig, PrecisionConfig, PredictorConfig, PredictorConfigBuilder};
    pub use predictor_spi::{PredictionRequest, PredictionResponse, PredictorError, RatePredictor};
}
