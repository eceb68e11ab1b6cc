//! Algorithm Consumer API
//!
//! Consumer-facing configuration for the tabular models, plus re-exports of
//! the SPI contracts.
//!
//! - [`TreeConfig`] / [`TreeConfigBuilder`]: decision tree growth limits
//! - [`ScalerConfig`]: standard scaler toggles

pub mod scaler;
pub mod tree;

pub use scaler::ScalerConfig;
pub use tree::{TreeConfig, TreeConfigBuilder, DEFAULT_RANDOM_STATE};

// Re-export all SPI types
pub use algorithm_spi::{
    FeatureTransformer, ModelError, RegressionMetrics, Regressor, Result,
};
