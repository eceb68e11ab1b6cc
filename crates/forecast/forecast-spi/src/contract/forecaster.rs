//! Forecaster trait

use crate::error::Result;
use crate::model::{FitSummary, ForecastPoint, FuturePoint, TimeSeriesFrame};

/// Time-series model with extra regressors
///
/// Regressors are registered before fitting; every [`FuturePoint`] then
/// carries one value per registered regressor, in registration order.
pub trait Forecaster: Send + Sync {
    /// Register an extra regressor by column name.
    fn add_regressor(&mut self, name: &str) -> Result<()>;

    /// Names of the registered regressors, in order
    fn regressor_names(&self) -> &[String];

    /// Fit the model to an observed series.
    fn fit(&mut self, frame: &TimeSeriesFrame) -> Result<()>;

    /// Forecast every point.
    fn forecast(&self, points: &[FuturePoint]) -> Result<Vec<ForecastPoint>>;

    /// Forecast a single point.
    fn forecast_one(&self, point: &FuturePoint) -> Result<ForecastPoint> {
        let mut out = self.forecast(std::slice::from_ref(point))?;
        out.pop()
            .ok_or_else(|| crate::ForecastError::NumericalError("empty forecast".to_string()))
    }

    /// Describe the fitted model; `None` before fit.
    fn summary(&self) -> Option<FitSummary>;

    fn is_fitted(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ForecastError;
    use chrono::NaiveDate;

    /// Forecasts the last observed value
    #[derive(Default)]
    struct LastValue {
        names: Vec<String>,
        last: Option<f64>,
    }

    impl Forecaster for LastValue {
        fn add_regressor(&mut self, name: &str) -> Result<()> {
            if self.names.iter().any(|n| n == name) {
                return Err(ForecastError::DuplicateRegressor(name.to_string()));
            }
            self.names.push(name.to_string());
            Ok(())
        }

        fn regressor_names(&self) -> &[String] {
            &self.names
        }

        fn fit(&mut self, frame: &TimeSeriesFrame) -> Result<()> {
            self.last = frame.values().last().copied();
            Ok(())
        }

        fn forecast(&self, points: &[FuturePoint]) -> Result<Vec<ForecastPoint>> {
            let last = self.last.ok_or(ForecastError::NotFitted)?;
            points
                .iter()
                .map(|p| {
                    if p.regressors.len() != self.names.len() {
                        return Err(ForecastError::RegressorMismatch {
                            expected: self.names.len(),
                            actual: p.regressors.len(),
                        });
                    }
                    Ok(ForecastPoint {
                        date: p.date,
                        yhat: last,
                        yhat_lower: last,
                        yhat_upper: last,
                        trend: last,
                        seasonal: 0.0,
                        regressors: 0.0,
                    })
                })
                .collect()
        }

        fn summary(&self) -> Option<FitSummary> {
            self.last.map(|_| FitSummary {
                n_changepoints: 0,
                seasonalities: Vec::new(),
                regressors: self.names.clone(),
                sigma_obs: 0.0,
                interval_width: 0.8,
            })
        }

        fn is_fitted(&self) -> bool {
            self.last.is_some()
        }
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_forecast_one_default() {
        let mut model = LastValue::default();
        model.add_regressor("x").unwrap();
        let frame = TimeSeriesFrame::new(vec![date(1), date(2)], vec![1.0, 2.5]).unwrap();
        model.fit(&frame).unwrap();

        let point = model
            .forecast_one(&FuturePoint::new(date(3), vec![0.0]))
            .unwrap();
        assert_eq!(point.yhat, 2.5);
        assert_eq!(point.date, date(3));
    }

    #[test]
    fn test_forecast_one_propagates_errors() {
        let model = LastValue::default();
        let err = model
            .forecast_one(&FuturePoint::new(date(3), vec![]))
            .unwrap_err();
        assert_eq!(err, ForecastError::NotFitted);
    }

    #[test]
    fn test_summary_tracks_fit() {
        let mut model: Box<dyn Forecaster> = Box::new(LastValue::default());
        assert!(model.summary().is_none());
        model.add_regressor("a").unwrap();
        assert!(model.add_regressor("a").is_err());
        model
            .fit(&TimeSeriesFrame::new(vec![date(1)], vec![1.0]).unwrap())
            .unwrap();
        assert!(model.is_fitted());
        assert_eq!(model.summary().unwrap().regressors, vec!["a".to_string()]);
    }
}
