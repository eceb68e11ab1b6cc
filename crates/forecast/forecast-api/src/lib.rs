//! Forecast Consumer API
//!
//! Configuration and builder for the additive forecaster, plus re-exports of
//! the SPI contract and models.

pub mod config;

pub use config::{ForecasterConfig, ForecasterConfigBuilder, SeasonalityMode};

// Re-export traits from SPI
pub use forecast_spi::{
    FitSummary, ForecastError, ForecastPoint, Forecaster, FuturePoint, RegressorColumn, Result,
    TimeSeriesFrame,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecasterConfig, ForecasterConfigBuilder, SeasonalityMode};
    pub use forecast_spi::{ForecastError, Forecaster, FuturePoint, TimeSeriesFrame};
}
