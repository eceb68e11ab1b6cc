//! Regression metrics model

use serde::{Deserialize, Serialize};

/// Error metrics of a regressor against known targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Mean absolute error
    pub mae: f64,
    /// Coefficient of determination
    pub r2: f64,
}

impl RegressionMetrics {
    pub fn new(mse: f64, mae: f64, r2: f64) -> Self {
        Self { mse, mae, r2 }
    }

    /// Root mean squared error
    pub fn rmse(&self) -> f64 {
        self.mse.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmse() {
        let m = RegressionMetrics::new(4.0, 1.5, 0.9);
        assert!((m.rmse() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_serializes_with_short_names() {
        let m = RegressionMetrics::new(0.01, 0.05, 0.99);
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["mse"], 0.01);
        assert_eq!(json["mae"], 0.05);
        assert_eq!(json["r2"], 0.99);
    }
}
