//! Error types for dataset operations

mod data_error;

pub use data_error::{DataError, Result};
