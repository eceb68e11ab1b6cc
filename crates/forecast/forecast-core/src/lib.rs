//! Forecast Core
//!
//! Additive seasonal forecaster with extra regressors, and the pieces it is
//! built from: piecewise-linear trend, Fourier seasonality, regressor
//! standardization, ridge solver and prediction intervals.

pub mod additive;
pub mod confidence;
pub mod linalg;
pub mod regressor;
pub mod seasonality;
pub mod trend;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    FitSummary, ForecastError, ForecastPoint, Forecaster, FuturePoint, Result, TimeSeriesFrame,
};

// Re-export main types
pub use additive::AdditiveForecaster;
pub use seasonality::FourierSeasonality;
pub use trend::PiecewiseLinearTrend;
