//! Time-series frame with extra regressors

use chrono::NaiveDate;

use crate::error::{ForecastError, Result};

/// A named extra regressor column aligned with the frame's dates
#[derive(Debug, Clone, PartialEq)]
pub struct RegressorColumn {
    pub name: String,
    pub values: Vec<f64>,
}

/// Observed series the forecaster is fitted on
///
/// Dates need not be sorted; the forecaster orders them itself.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesFrame {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
    regressors: Vec<RegressorColumn>,
}

impl TimeSeriesFrame {
    /// Create a frame from dates and observed values of equal length.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::InvalidData(format!(
                "{} dates but {} values",
                dates.len(),
                values.len()
            )));
        }
        Ok(Self {
            dates,
            values,
            regressors: Vec::new(),
        })
    }

    /// Attach a regressor column.
    pub fn with_regressor(mut self, name: &str, values: Vec<f64>) -> Result<Self> {
        if self.regressor(name).is_some() {
            return Err(ForecastError::DuplicateRegressor(name.to_string()));
        }
        if values.len() != self.dates.len() {
            return Err(ForecastError::InvalidData(format!(
                "regressor '{}' has {} values for {} dates",
                name,
                values.len(),
                self.dates.len()
            )));
        }
        self.regressors.push(RegressorColumn {
            name: name.to_string(),
            values,
        });
        Ok(self)
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn regressors(&self) -> &[RegressorColumn] {
        &self.regressors
    }

    /// Look up a regressor column by name.
    pub fn regressor(&self, name: &str) -> Option<&[f64]> {
        self.regressors
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(n: u32) -> Vec<NaiveDate> {
        (1..=n)
            .map(|m| NaiveDate::from_ymd_opt(2020, m, 1).unwrap())
            .collect()
    }

    #[test]
    fn test_new_frame() {
        let frame = TimeSeriesFrame::new(dates(3), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(frame.len(), 3);
        assert!(!frame.is_empty());
        assert!(frame.regressors().is_empty());
    }

    #[test]
    fn test_length_mismatch() {
        let err = TimeSeriesFrame::new(dates(3), vec![1.0]).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidData(_)));
    }

    #[test]
    fn test_with_regressor() {
        let frame = TimeSeriesFrame::new(dates(2), vec![1.0, 2.0])
            .unwrap()
            .with_regressor("Tracker", vec![3.5, 3.6])
            .unwrap();

        assert_eq!(frame.regressor("Tracker"), Some(&[3.5, 3.6][..]));
        assert_eq!(frame.regressor("LIBOR_3m"), None);
    }

    #[test]
    fn test_duplicate_regressor() {
        let err = TimeSeriesFrame::new(dates(1), vec![1.0])
            .unwrap()
            .with_regressor("a", vec![1.0])
            .unwrap()
            .with_regressor("a", vec![2.0])
            .unwrap_err();
        assert_eq!(err, ForecastError::DuplicateRegressor("a".to_string()));
    }

    #[test]
    fn test_regressor_length_mismatch() {
        let result = TimeSeriesFrame::new(dates(2), vec![1.0, 2.0])
            .unwrap()
            .with_regressor("a", vec![1.0]);
        assert!(matches!(result, Err(ForecastError::InvalidData(_))));
    }
}
