//! Prediction response

use algorithm_spi::RegressionMetrics;
use serde::{Deserialize, Serialize};

/// In-sample error metrics of the tree regressor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeMetrics {
    pub mse: f64,
    pub mae: f64,
    pub r2: f64,
}

impl From<RegressionMetrics> for TreeMetrics {
    fn from(m: RegressionMetrics) -> Self {
        Self {
            mse: m.mse,
            mae: m.mae,
            r2: m.r2,
        }
    }
}

/// Body of a successful prediction
///
/// `prophet_prediction` and `confidence_interval` come from the additive
/// time-series model and are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub tree_prediction: f64,
    pub prophet_prediction: f64,
    pub combined_rate: f64,
    pub confidence_interval: [f64; 2],
    pub tree_metrics: TreeMetrics,
}
