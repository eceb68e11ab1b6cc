//! Fitted model summary

use chrono::NaiveDate;
use forecast_spi::FitSummary;
use serde::{Deserialize, Serialize};

use super::response::TreeMetrics;

/// Shape of the fitted tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSummary {
    pub depth: usize,
    pub n_leaves: usize,
    /// Normalized importance per feature, in training order
    pub feature_importances: Vec<f64>,
}

/// Training-time facts about the served models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Rows used for training
    pub records: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub features: Vec<String>,
    pub target: String,
    pub tree: TreeSummary,
    pub forecaster: FitSummary,
    pub tree_metrics: TreeMetrics,
}
