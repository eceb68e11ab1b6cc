//! Predictor Service Provider Interface
//!
//! Defines the rate predictor contract and the JSON-facing request,
//! response and summary models.
//!
//! - [`RatePredictor`]: blended prediction from the fitted models
//! - [`PredictionRequest`] / [`PredictionResponse`]: `/predict` payloads
//! - [`ModelSummary`]: facts about the fitted models
//! - [`PredictorError`]: error type with client/server classification

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RatePredictor;
pub use error::{PredictorError, Result};
pub use model::{ModelSummary, PredictionRequest, PredictionResponse, TreeMetrics, TreeSummary};
