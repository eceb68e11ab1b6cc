//! Data source trait definition.

use crate::error::Result;
use crate::model::Dataset;

/// Trait for sources that can produce the historical dataset.
///
/// Implementations read once at startup; the returned [`Dataset`] contains
/// only complete rows.
pub trait DataSource: Send + Sync {
    /// Data source name, used in log lines.
    fn name(&self) -> &str;

    /// Load and clean the full dataset.
    fn load(&self) -> Result<Dataset>;
}
