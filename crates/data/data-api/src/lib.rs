//! Data Consumer API
//!
//! Configuration types for locating and reading the historical dataset.

pub mod config;

pub use config::{DatasetConfig, DatasetConfigBuilder, DEFAULT_DATASET_PATH};
