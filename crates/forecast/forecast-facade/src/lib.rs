//! Forecast Facade
//!
//! High-level API for the additive forecaster. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI)
pub use forecast_api::*;

// Re-export core modules for direct access
pub use forecast_core::{confidence, linalg, regressor, seasonality, trend};

// Re-export core types at root
pub use forecast_core::{AdditiveForecaster, FourierSeasonality, PiecewiseLinearTrend};
