//! Data Source Facade
//!
//! Unified re-exports for the data module.
//!
//! This facade provides a single entry point for all data source functionality:
//! - `data_spi` - Traits, types, and errors for data sources
//! - `data_api` - Configuration types and builders
//! - `data_core` - Implementations (CSV)
//!
//! # Example
//!
//! ```rust,no_run
//! use data_facade::{CsvDataSource, DataSource, DatasetConfig};
//!
//! let source = CsvDataSource::new(DatasetConfig::new("uk.csv"));
//! let dataset = source.load().unwrap();
//! println!("Got {} complete rows", dataset.len());
//! ```

// Re-export everything from SPI
pub use data_spi::*;

// Re-export everything from API
pub use data_api::*;

// Re-export everything from Core
pub use data_core::*;
