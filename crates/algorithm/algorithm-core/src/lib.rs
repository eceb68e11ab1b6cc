//! Algorithm Core Implementations
//!
//! Tabular models used by the rate predictor:
//!
//! - [`tree`]: CART regression tree
//! - [`utils`]: metrics, standardization, input validation
//!
//! ## Example
//!
//! ```rust
//! use algorithm_core::prelude::*;
//!
//! let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64, (i * i) as f64]).collect();
//! let y: Vec<f64> = (0..10).map(|i| i as f64 * 0.5).collect();
//!
//! let mut scaler = StandardScaler::new();
//! let scaled = scaler.fit_transform(&x).unwrap();
//!
//! let mut tree = DecisionTreeRegressor::new();
//! tree.fit(&scaled, &y).unwrap();
//! let metrics = evaluate(&y, &tree.predict(&scaled).unwrap()).unwrap();
//! assert!(metrics.r2 > 0.99);
//! ```

pub mod tree;
pub mod utils;

// Re-export from SPI
pub use algorithm_spi::{FeatureTransformer, ModelError, RegressionMetrics, Regressor, Result};

pub use tree::{DecisionTreeRegressor, TreeNode};
pub use utils::preprocessing::StandardScaler;

/// Prelude module for convenient imports
pub mod prelude {
    pub use algorithm_api::{ScalerConfig, TreeConfig, TreeConfigBuilder};
    pub use algorithm_spi::{FeatureTransformer, Regressor};

    pub use crate::tree::DecisionTreeRegressor;
    pub use crate::utils::metrics::{evaluate, mae, mse, r_squared};
    pub use crate::utils::preprocessing::StandardScaler;
    // Error types
    pub use algorithm_spi::{ModelError, RegressionMetrics, Result};
}
