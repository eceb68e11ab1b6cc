//! Contract traits for dataset providers

mod data_source;

pub use data_source::DataSource;
