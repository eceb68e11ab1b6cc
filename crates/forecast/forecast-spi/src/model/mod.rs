//! Model module containing data structures

mod forecast_point;
mod frame;
mod summary;

pub use forecast_point::{ForecastPoint, FuturePoint};
pub use frame::{RegressorColumn, TimeSeriesFrame};
pub use summary::FitSummary;
