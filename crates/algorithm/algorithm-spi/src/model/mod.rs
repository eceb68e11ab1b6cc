//! Model value types

mod metrics;

pub use metrics::RegressionMetrics;
