//! Forecast Service Provider Interface
//!
//! Defines the forecaster contract together with the time-series frame it
//! is fitted on and the points it produces.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::{FitSummary, ForecastPoint, FuturePoint, RegressorColumn, TimeSeriesFrame};
