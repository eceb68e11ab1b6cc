//! Utility functions for tabular models
//!
//! - [`metrics`]: regression error metrics
//! - [`preprocessing`]: feature standardization
//! - [`validation`]: shape and finiteness checks on input matrices

pub mod metrics;
pub mod preprocessing;
pub mod validation;
