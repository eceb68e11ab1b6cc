//! Prediction request

use serde::{Deserialize, Serialize};

/// Body of a prediction request
///
/// `features` are the six raw rates in training order; `date` is an ISO
/// date such as `2024-05-01`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub features: Vec<f64>,
    pub date: String,
}

impl PredictionRequest {
    pub fn new(features: Vec<f64>, date: impl Into<String>) -> Self {
        Self {
            features,
            date: date.into(),
        }
    }
}
