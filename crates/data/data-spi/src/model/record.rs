//! Historical observations and the in-memory dataset.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::feature::{FeatureVector, FEATURE_COLUMNS, FEATURE_COUNT};

/// One complete row of the historical dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    /// Observation date
    pub date: NaiveDate,
    /// Target rate
    pub target: f64,
    /// Predictor values in training order
    pub features: FeatureVector,
}

impl HistoricalRecord {
    /// Create a new record.
    pub fn new(date: NaiveDate, target: f64, features: FeatureVector) -> Self {
        Self {
            date,
            target,
            features,
        }
    }
}

/// Loaded dataset, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<HistoricalRecord>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<HistoricalRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[HistoricalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Predictor names in training order.
    pub fn feature_names(&self) -> [&'static str; FEATURE_COUNT] {
        FEATURE_COLUMNS
    }

    /// Row-major feature matrix.
    pub fn feature_matrix(&self) -> Vec<Vec<f64>> {
        self.records.iter().map(|r| r.features.to_vec()).collect()
    }

    /// Values of a single predictor column.
    pub fn feature_column(&self, index: usize) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.features.get(index))
            .collect()
    }

    pub fn targets(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.target).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    /// Earliest and latest observation dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.iter().map(|r| r.date).min()?;
        let last = self.records.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}

impl From<Vec<HistoricalRecord>> for Dataset {
    fn from(records: Vec<HistoricalRecord>) -> Self {
        Self::new(records)
    }
}
