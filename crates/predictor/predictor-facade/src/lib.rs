//! Predictor Facade
//!
//! High-level API for blended rate prediction. Re-exports all public types
//! from the predictor stack for convenient usage.

// Re-export everything from API (which includes SPI)
pub use predictor_api::*;

// Re-export core modules for direct access
pub use predictor_core::{blend, service, training};

// Re-export core types at root
pub use predictor_core::{PredictionService, TrainedModels};
