//! Contract traits for model implementations
//!
//! - [`Regressor`]: supervised fit/predict over a row-major feature matrix
//! - [`FeatureTransformer`]: per-column transformations learned from data

mod regressor;
mod transformer;

pub use regressor::Regressor;
pub use transformer::FeatureTransformer;
