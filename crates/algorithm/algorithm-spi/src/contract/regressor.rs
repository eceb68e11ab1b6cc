//! Regressor trait for tabular models
//!
//! Defines the fit-predict interface shared by supervised models that map a
//! feature row to a single numeric value.

use crate::error::Result;

/// Common trait for supervised regressors
///
/// Rows are row-major: `x[i]` is the feature vector of observation `i` and
/// `y[i]` its target. Implementations must be immutable after fitting so that
/// a fitted model can be shared across threads for prediction.
///
/// # Example
///
/// ```rust,ignore
/// use algorithm_spi::Regressor;
///
/// fn fit_and_score<R: Regressor>(model: &mut R, x: &[Vec<f64>], y: &[f64]) -> algorithm_spi::Result<Vec<f64>> {
///     model.fit(x, y)?;
///     model.predict(x)
/// }
/// ```
pub trait Regressor {
    /// Fit the model to a feature matrix and target vector
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()>;

    /// Predict the target for a single feature row
    fn predict_one(&self, row: &[f64]) -> Result<f64>;

    /// Predict the target for every row of a matrix
    fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>> {
        x.iter().map(|row| self.predict_one(row)).collect()
    }

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
