//! Feature transformer trait

use crate::error::Result;

/// Column-wise transformation learned from a feature matrix
///
/// The transformer is fitted once and then applied to training and request
/// rows alike, so the same statistics are used on both sides.
pub trait FeatureTransformer: Send + Sync {
    /// Learn per-column parameters
    fn fit(&mut self, x: &[Vec<f64>]) -> Result<()>;

    /// Transform a single row
    fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Undo the transformation for a single row
    fn inverse_transform_row(&self, row: &[f64]) -> Result<Vec<f64>>;

    /// Transform every row of a matrix
    fn transform(&self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        x.iter().map(|row| self.transform_row(row)).collect()
    }

    /// Fit, then transform the same matrix
    fn fit_transform(&mut self, x: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
        self.fit(x)?;
        self.transform(x)
    }

    /// Name of this transformer
    fn name(&self) -> &str;

    /// Check if the transformer has been fitted
    fn is_fitted(&self) -> bool;
}
