//! Additive forecaster
//!
//! `y(t) = trend(t) + Σ seasonal(t) + Σ β_r · regressor_r(t) + ε`, fitted as
//! a MAP estimate under independent Gaussian priors on every coefficient.

use chrono::NaiveDate;
use forecast_api::ForecasterConfig;
use forecast_spi::{
    FitSummary, ForecastError, ForecastPoint, Forecaster, FuturePoint, Result, TimeSeriesFrame,
};

use crate::confidence::{band, combined_sd, z_value};
use crate::linalg::{dot, ridge_solve};
use crate::regressor::RegressorScaling;
use crate::seasonality::{resolve_seasonalities, FourierSeasonality};
use crate::trend::{changepoint_features, select_changepoints, PiecewiseLinearTrend, TimeScale};

/// Prior scale of the trend offset and base slope
const TREND_PRIOR_SCALE: f64 = 5.0;

/// Ridge used by the first pass, and the floor on every second-pass penalty
const FIRST_PASS_RIDGE: f64 = 1e-6;

/// Floor on the estimated noise variance, in scaled units
const MIN_NOISE_VARIANCE: f64 = 1e-10;

/// Additive seasonal forecaster with extra regressors
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use forecast_core::AdditiveForecaster;
/// use forecast_spi::{Forecaster, FuturePoint, TimeSeriesFrame};
///
/// let dates: Vec<NaiveDate> = (0..48)
///     .map(|i| NaiveDate::from_ymd_opt(2010 + i / 12, (i % 12) as u32 + 1, 1).unwrap())
///     .collect();
/// let y: Vec<f64> = (0..48).map(|i| 1.0 + 0.02 * i as f64).collect();
///
/// let mut model = AdditiveForecaster::new();
/// model.fit(&TimeSeriesFrame::new(dates, y).unwrap()).unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
/// let point = model.forecast_one(&FuturePoint::new(date, vec![])).unwrap();
/// assert!(point.yhat_lower <= point.yhat && point.yhat <= point.yhat_upper);
/// ```
#[derive(Debug, Clone)]
pub struct AdditiveForecaster {
    config: ForecasterConfig,
    regressor_names: Vec<String>,
    fitted: Option<FittedState>,
}

#[derive(Debug, Clone)]
struct FittedState {
    time_scale: TimeScale,
    y_scale: f64,
    trend: PiecewiseLinearTrend,
    seasonalities: Vec<(FourierSeasonality, Vec<f64>)>,
    regressors: Vec<(RegressorScaling, f64)>,
    sigma_obs: f64,
    z: f64,
}

impl AdditiveForecaster {
    pub fn new() -> Self {
        Self::with_config(ForecasterConfig::default())
    }

    pub fn with_config(config: ForecasterConfig) -> Self {
        Self {
            config,
            regressor_names: Vec::new(),
            fitted: None,
        }
    }

    pub fn config(&self) -> &ForecasterConfig {
        &self.config
    }

    /// Residual standard deviation of the fit, in target units.
    pub fn sigma_obs(&self) -> Option<f64> {
        self.fitted.as_ref().map(|f| f.sigma_obs)
    }

    /// Fitted trend, in scaled target units.
    pub fn trend(&self) -> Option<&PiecewiseLinearTrend> {
        self.fitted.as_ref().map(|f| &f.trend)
    }

    fn state(&self) -> Result<&FittedState> {
        self.fitted.as_ref().ok_or(ForecastError::NotFitted)
    }

    /// Prior scale for each design column.
    fn prior_scales(
        &self,
        n_changepoints: usize,
        seasonalities: &[FourierSeasonality],
    ) -> Vec<f64> {
        let mut scales = vec![TREND_PRIOR_SCALE, TREND_PRIOR_SCALE];
        scales.extend(std::iter::repeat(self.config.changepoint_prior_scale).take(n_changepoints));
        for s in seasonalities {
            scales.extend(std::iter::repeat(self.config.seasonality_prior_scale).take(s.width()));
        }
        scales.extend(
            std::iter::repeat(self.config.regressor_prior_scale).take(self.regressor_names.len()),
        );
        scales
    }
}

impl Default for AdditiveForecaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Design row: `[1, t, hinges.., fourier.., standardized regressors..]`.
fn design_row(
    t: f64,
    date: NaiveDate,
    changepoints: &[f64],
    seasonalities: &[FourierSeasonality],
    regressors: &[f64],
) -> Vec<f64> {
    let mut row = vec![1.0, t];
    row.extend(changepoint_features(t, changepoints));
    for s in seasonalities {
        row.extend(s.features(date));
    }
    row.extend_from_slice(regressors);
    row
}

fn residuals(design: &[Vec<f64>], y: &[f64], beta: &[f64]) -> Vec<f64> {
    design
        .iter()
        .zip(y.iter())
        .map(|(row, target)| target - dot(row, beta))
        .collect()
}

fn mean_square(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>() / values.len() as f64
}

impl Forecaster for AdditiveForecaster {
    fn add_regressor(&mut self, name: &str) -> Result<()> {
        if self.fitted.is_some() {
            return Err(ForecastError::InvalidParameter {
                name: name.to_string(),
                reason: "regressors must be added before fitting".to_string(),
            });
        }
        if self.regressor_names.iter().any(|n| n == name) {
            return Err(ForecastError::DuplicateRegressor(name.to_string()));
        }
        self.regressor_names.push(name.to_string());
        Ok(())
    }

    fn regressor_names(&self) -> &[String] {
        &self.regressor_names
    }

    fn fit(&mut self, frame: &TimeSeriesFrame) -> Result<()> {
        self.config.validate()?;

        let columns: Vec<&[f64]> = self
            .regressor_names
            .iter()
            .map(|name| {
                frame
                    .regressor(name)
                    .ok_or_else(|| ForecastError::UnknownRegressor(name.clone()))
            })
            .collect::<Result<_>>()?;
        if frame.values().iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::InvalidData(
                "series contains non-finite values".to_string(),
            ));
        }

        let mut order: Vec<usize> = (0..frame.len()).collect();
        order.sort_by_key(|&i| frame.dates()[i]);
        let dates: Vec<NaiveDate> = order.iter().map(|&i| frame.dates()[i]).collect();
        let y: Vec<f64> = order.iter().map(|&i| frame.values()[i]).collect();

        let mut distinct = dates.clone();
        distinct.dedup();
        if distinct.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: distinct.len(),
            });
        }

        let time_scale = TimeScale::new(dates[0], dates[dates.len() - 1])?;
        let t: Vec<f64> = dates.iter().map(|&d| time_scale.scaled(d)).collect();

        let max_abs = y.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        let y_scale = if max_abs > 0.0 { max_abs } else { 1.0 };
        let y_scaled: Vec<f64> = y.iter().map(|v| v / y_scale).collect();

        let changepoints =
            select_changepoints(&t, self.config.n_changepoints, self.config.changepoint_range);
        let seasonalities = resolve_seasonalities(
            self.config.yearly_seasonality,
            self.config.yearly_fourier_order,
            self.config.weekly_seasonality,
            self.config.weekly_fourier_order,
            &dates,
        );
        let scalings: Vec<RegressorScaling> = self
            .regressor_names
            .iter()
            .zip(columns.iter())
            .map(|(name, values)| RegressorScaling::fit(name, values))
            .collect::<Result<_>>()?;

        let design: Vec<Vec<f64>> = order
            .iter()
            .enumerate()
            .map(|(row, &i)| {
                let regs: Vec<f64> = scalings
                    .iter()
                    .zip(columns.iter())
                    .map(|(s, values)| s.apply(values[i]))
                    .collect();
                design_row(t[row], dates[row], &changepoints, &seasonalities, &regs)
            })
            .collect();

        // First pass estimates the noise level the priors are weighed against
        let prior_scales = self.prior_scales(changepoints.len(), &seasonalities);
        let first = ridge_solve(&design, &y_scaled, &vec![FIRST_PASS_RIDGE; prior_scales.len()])?;
        let noise_variance = mean_square(&residuals(&design, &y_scaled, &first)).max(MIN_NOISE_VARIANCE);

        let penalties: Vec<f64> = prior_scales
            .iter()
            .map(|s| (noise_variance / (s * s)).max(FIRST_PASS_RIDGE))
            .collect();
        let beta = ridge_solve(&design, &y_scaled, &penalties)?;
        let sigma_obs = y_scale * mean_square(&residuals(&design, &y_scaled, &beta)).sqrt();

        let n_cp = changepoints.len();
        let trend = PiecewiseLinearTrend {
            offset: beta[0],
            slope: beta[1],
            changepoints,
            deltas: beta[2..2 + n_cp].to_vec(),
        };
        let mut cursor = 2 + n_cp;
        let mut fitted_seasonalities = Vec::with_capacity(seasonalities.len());
        for s in seasonalities {
            let coefs = beta[cursor..cursor + s.width()].to_vec();
            cursor += s.width();
            fitted_seasonalities.push((s, coefs));
        }
        let regressors: Vec<(RegressorScaling, f64)> =
            scalings.into_iter().zip(beta[cursor..].iter().copied()).collect();

        tracing::debug!(
            observations = y.len(),
            changepoints = n_cp,
            seasonalities = fitted_seasonalities.len(),
            regressors = regressors.len(),
            sigma_obs,
            "additive forecaster fitted"
        );

        self.fitted = Some(FittedState {
            time_scale,
            y_scale,
            trend,
            seasonalities: fitted_seasonalities,
            regressors,
            sigma_obs,
            z: z_value(self.config.interval_width)?,
        });
        Ok(())
    }

    fn forecast(&self, points: &[FuturePoint]) -> Result<Vec<ForecastPoint>> {
        let state = self.state()?;

        points
            .iter()
            .map(|point| {
                if point.regressors.len() != state.regressors.len() {
                    return Err(ForecastError::RegressorMismatch {
                        expected: state.regressors.len(),
                        actual: point.regressors.len(),
                    });
                }
                if point.regressors.iter().any(|v| !v.is_finite()) {
                    return Err(ForecastError::InvalidData(
                        "regressor values must be finite".to_string(),
                    ));
                }

                let t = state.time_scale.scaled(point.date);
                let trend = state.y_scale * state.trend.value(t);
                let seasonal = state.y_scale
                    * state
                        .seasonalities
                        .iter()
                        .map(|(s, coefs)| dot(&s.features(point.date), coefs))
                        .sum::<f64>();
                let regressors = state.y_scale
                    * state
                        .regressors
                        .iter()
                        .zip(point.regressors.iter())
                        .map(|((scaling, coef), &v)| coef * scaling.apply(v))
                        .sum::<f64>();

                let yhat = trend + seasonal + regressors;
                let sd = combined_sd(state.sigma_obs, state.y_scale * state.trend.future_sd(t));
                let (yhat_lower, yhat_upper) = band(yhat, sd, state.z);

                Ok(ForecastPoint {
                    date: point.date,
                    yhat,
                    yhat_lower,
                    yhat_upper,
                    trend,
                    seasonal,
                    regressors,
                })
            })
            .collect()
    }

    fn summary(&self) -> Option<FitSummary> {
        self.fitted.as_ref().map(|state| FitSummary {
            n_changepoints: state.trend.changepoints.len(),
            seasonalities: state
                .seasonalities
                .iter()
                .map(|(s, _)| s.name.clone())
                .collect(),
            regressors: self.regressor_names.clone(),
            sigma_obs: state.sigma_obs,
            interval_width: self.config.interval_width,
        })
    }

    fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }
}
