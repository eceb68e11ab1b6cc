//! Predictor columns and the fixed-arity feature vector.

use serde::{Deserialize, Serialize};

use crate::error::{DataError, Result};

/// Number of predictor columns.
pub const FEATURE_COUNT: usize = 6;

/// Predictor columns, in training order.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "Fixed_Rate_2y_95%_LTV",
    "Fixed_Rate_2y_75%_LTV",
    "Tracker",
    "Variable Rate",
    "LIBOR_3m",
    "Gov_Bond_Yield_10y",
];

/// Target column.
pub const TARGET_COLUMN: &str = "Bank_Rate";

/// Date column.
pub const DATE_COLUMN: &str = "Date";

/// Ordered predictor values for one observation.
///
/// Index `i` holds the value of `FEATURE_COLUMNS[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Create a feature vector from an array in training order.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Create a feature vector from a slice, checking its length.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; FEATURE_COUNT] =
            values.try_into().map_err(|_| DataError::FeatureCount {
                expected: FEATURE_COUNT,
                actual: values.len(),
            })?;
        Ok(Self(array))
    }

    /// Values in training order.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Value of a single predictor.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Iterate over `(column name, value)` pairs.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_COLUMNS.iter().copied().zip(self.0.iter().copied())
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

impl TryFrom<&[f64]> for FeatureVector {
    type Error = DataError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
