//! Extra regressor standardization

use forecast_spi::{ForecastError, Result};

/// Centering and scaling learned for one extra regressor
///
/// Binary {0, 1} columns are left as they are. Other columns use the mean
/// and the sample standard deviation (ddof = 1); a constant column keeps a
/// scale of 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressorScaling {
    pub name: String,
    pub mu: f64,
    pub std: f64,
}

impl RegressorScaling {
    /// Learn the scaling of a column.
    pub fn fit(name: &str, values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(ForecastError::InsufficientData {
                required: 1,
                actual: 0,
            });
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(format!(
                "regressor '{}' contains non-finite values",
                name
            )));
        }

        let is_binary = values.iter().all(|&v| v == 0.0 || v == 1.0)
            && values.iter().any(|&v| v == 0.0)
            && values.iter().any(|&v| v == 1.0);
        if is_binary {
            return Ok(Self::identity(name));
        }

        let n = values.len() as f64;
        let mu = values.iter().sum::<f64>() / n;
        let std = if values.len() > 1 {
            (values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        Ok(Self {
            name: name.to_string(),
            mu,
            std: if std > 0.0 { std } else { 1.0 },
        })
    }

    /// Scaling that leaves values unchanged.
    pub fn identity(name: &str) -> Self {
        Self {
            name: name.to_string(),
            mu: 0.0,
            std: 1.0,
        }
    }

    pub fn apply(&self, value: f64) -> f64 {
        (value - self.mu) / self.std
    }
}
