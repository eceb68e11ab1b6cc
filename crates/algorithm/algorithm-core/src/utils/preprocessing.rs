//! Feature standardization
//!
//! Column-wise zero-mean / unit-variance scaling learned from a training
//! matrix and replayed on unseen rows.

use algorithm_api::ScalerConfig;
use algorithm_spi::{FeatureTransformer, ModelError, Result};

use super::validation::{check_matrix, check_row};

/// Columns with a standard deviation below this are left unscaled.
const MIN_SCALE: f64 = 10.0 * f64::EPSILON;

/// Standardize features by removing the mean and scaling to unit variance
///
/// The standard deviation is the population one (ddof = 0).
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
///
/// let x = vec![vec![1.0, 10.0], vec![3.0, 10.0]];
/// let mut scaler = StandardScaler::new();
/// let scaled = scaler.fit_transform(&x).unwrap();
/// assert_eq!(scaled[0], vec![-1.0, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct StandardScaler {
    config: ScalerConfig,
    means: Vec<f64>,
    scales: Vec<f64>,
    fitted: bool,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::with_config(ScalerConfig::default())
    }

    pub fn with_config(config: ScalerConfig) -> Self {
        Self {
            config,
            means: Vec::new(),
            scales: Vec::new(),
            fitted: false,
        }
    }

    /// Per-column means learned during fit
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Per-column scales learned during fit
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// Number of columns seen during fit
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    fn shift(&self, j: usize) -> f64 {
        if self.config.with_mean {
            self.means[j]
        } else {
            0.0
        }
    }

    fn scale(&self, j: usize) -> f64 {
        if self.config.with_std {
            self.scales[j]
        } else {
            1.0
        }
    }

    fn check_fitted(&self, row: &[f64]) -> Result<()> {
        if !self.fitted {
            return Err(ModelError::NotFitted);
        }
        check_row(row, self.n_features())
    }
}

impl Default for StandardScaler {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureTransformer for StandardScaler {
    fn fit(&mut self, x: &[Vec<f64>]) -> Result<()> {
        let width = check_matrix(x)?;
        let n = x.len() as f64;

        let means: Vec<f64> = (0..width)
            .map(|j| x.iter().map(|row| row[j]).sum::<f64>() / n)
            .collect();
        let scales = (0..width)
            .map(|j| {
                let var = x.iter().map(|row| (row[j] - means[j]).powi(2)).sum::<f64>() / n;
                let std = var.sqrt();
                if std < MIN_SCALE {
                    1.0
                } else {
                    std
                }
            })
            .collect();

        self.means = means;
        self.scales = scales;
        self.fitted = true;
        Ok(())
    }

    fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_fitted(row)?;
        Ok(row
            .iter()
            .enumerate()
            .map(|(j, v)| (v - self.shift(j)) / self.scale(j))
            .collect())
    }

    fn inverse_transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.check_fitted(row)?;
        Ok(row
            .iter()
            .enumerate()
            .map(|(j, v)| v * self.scale(j) + self.shift(j))
            .collect())
    }

    fn name(&self) -> &str {
        "standard_scaler"
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}
