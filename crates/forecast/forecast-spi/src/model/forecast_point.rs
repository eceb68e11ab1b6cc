//! Forecast input and output points

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A date to forecast, with its regressor values in registration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuturePoint {
    pub date: NaiveDate,
    pub regressors: Vec<f64>,
}

impl FuturePoint {
    pub fn new(date: NaiveDate, regressors: Vec<f64>) -> Self {
        Self { date, regressors }
    }
}

/// Forecast for one date
///
/// `yhat` is the sum of the `trend`, `seasonal` and `regressors`
/// components. The bounds are symmetric around `yhat`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub yhat: f64,
    pub yhat_lower: f64,
    pub yhat_upper: f64,
    /// Piecewise-linear trend component
    pub trend: f64,
    /// Sum of all seasonal components
    pub seasonal: f64,
    /// Sum of all extra regressor contributions
    pub regressors: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_future_point_serde() {
        let point = FuturePoint::new(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), vec![1.0]);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2024-05-01");
        assert_eq!(json["regressors"][0], 1.0);
    }

    #[test]
    fn test_forecast_point_serializes_components() {
        let point = ForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            yhat: 4.0,
            yhat_lower: 3.5,
            yhat_upper: 4.5,
            trend: 3.0,
            seasonal: 0.25,
            regressors: 0.75,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["yhat"], 4.0);
        assert_eq!(json["trend"], 3.0);
        assert_eq!(json["regressors"], 0.75);
    }
}
