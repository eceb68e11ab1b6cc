//! Algorithm Service Provider Interface
//!
//! Defines core traits and error types for tabular regression models.
//!
//! - [`Regressor`]: fit-predict contract for supervised models
//! - [`FeatureTransformer`]: column-wise preprocessing contract
//! - [`ModelError`]: standardized error type for all model operations
//! - [`RegressionMetrics`]: error metrics of a fitted regressor

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{FeatureTransformer, Regressor};
pub use error::{ModelError, Result};
pub use model::RegressionMetrics;
