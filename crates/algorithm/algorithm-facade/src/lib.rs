//! Algorithm Facade
//!
//! High-level API for the tabular models. Re-exports all public types
//! from the algorithm stack for convenient usage.
//!
//! # Example
//!
//! ```rust
//! use algorithm_facade::prelude::*;
//!
//! let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![0.0, 0.0, 1.0, 1.0];
//! let mut tree = DecisionTreeRegressor::new();
//! tree.fit(&x, &y).unwrap();
//! assert_eq!(tree.predict_one(&[2.5]).unwrap(), 1.0);
//! ```

pub use algorithm_api::{ScalerConfig, TreeConfig, TreeConfigBuilder, DEFAULT_RANDOM_STATE};
pub use algorithm_core::{
    DecisionTreeRegressor, FeatureTransformer, ModelError, RegressionMetrics, Regressor, Result,
    StandardScaler, TreeNode,
};

// Explicit re-exports for documentation
pub use algorithm_core::prelude;
pub use algorithm_core::utils;
