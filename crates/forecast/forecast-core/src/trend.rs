//! Piecewise-linear trend
//!
//! Time is scaled so the history spans `[0, 1]`. The trend is continuous,
//! with a slope change `delta_j` at each changepoint `c_j`:
//! `offset + slope * t + Σ delta_j * max(0, t - c_j)`.

use chrono::NaiveDate;
use forecast_spi::{ForecastError, Result};

/// Maps dates onto the scaled time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: NaiveDate,
    span_days: f64,
}

impl TimeScale {
    /// Build from the first and last history dates.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        let span_days = (end - start).num_days() as f64;
        if span_days <= 0.0 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: 1,
            });
        }
        Ok(Self { start, span_days })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn span_days(&self) -> f64 {
        self.span_days
    }

    /// Scaled time of a date; 0 at the first and 1 at the last history date.
    pub fn scaled(&self, date: NaiveDate) -> f64 {
        (date - self.start).num_days() as f64 / self.span_days
    }
}

/// Place potential changepoints over the first `range` share of the history.
///
/// `t` must be sorted. Indices are spread evenly over the first
/// `floor(len * range)` points and the first one is dropped, so no
/// changepoint sits on the first observation.
pub fn select_changepoints(t: &[f64], n_changepoints: usize, range: f64) -> Vec<f64> {
    let hist_size = (t.len() as f64 * range).floor() as usize;
    let n = n_changepoints.min(hist_size.saturating_sub(1));
    if n == 0 {
        return Vec::new();
    }

    let last = (hist_size - 1) as f64;
    (1..=n)
        .map(|k| {
            let idx = (k as f64 * last / n as f64).round() as usize;
            t[idx]
        })
        .collect()
}

/// Hinge features `max(0, t - c)` for each changepoint.
pub fn changepoint_features(t: f64, changepoints: &[f64]) -> impl Iterator<Item = f64> + '_ {
    changepoints.iter().map(move |&c| (t - c).max(0.0))
}

/// Fitted piecewise-linear trend in scaled target units
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseLinearTrend {
    pub offset: f64,
    pub slope: f64,
    pub changepoints: Vec<f64>,
    pub deltas: Vec<f64>,
}

impl PiecewiseLinearTrend {
    /// Trend value at scaled time `t`.
    pub fn value(&self, t: f64) -> f64 {
        self.offset
            + self.slope * t
            + changepoint_features(t, &self.changepoints)
                .zip(self.deltas.iter())
                .map(|(h, d)| h * d)
                .sum::<f64>()
    }

    /// Slope in effect at scaled time `t`.
    pub fn slope_at(&self, t: f64) -> f64 {
        self.slope
            + self
                .changepoints
                .iter()
                .zip(self.deltas.iter())
                .filter(|(&c, _)| t > c)
                .map(|(_, d)| d)
                .sum::<f64>()
    }

    /// Mean absolute changepoint delta; the scale of future slope changes.
    pub fn delta_scale(&self) -> f64 {
        if self.deltas.is_empty() {
            return 0.0;
        }
        self.deltas.iter().map(|d| d.abs()).sum::<f64>() / self.deltas.len() as f64
    }

    /// Changepoints per unit of scaled time.
    pub fn changepoint_rate(&self) -> f64 {
        self.changepoints.len() as f64
    }

    /// Standard deviation of the trend at `t` from slope changes that may
    /// occur after the history ends.
    ///
    /// Future changepoints arrive at `changepoint_rate` per unit of time
    /// with slope changes of scale `delta_scale`; the variance of their
    /// summed effect `h` units past the history is `2 b² S h³ / 3`.
    pub fn future_sd(&self, t: f64) -> f64 {
        let h = t - 1.0;
        if h <= 0.0 {
            return 0.0;
        }
        self.delta_scale() * (2.0 * self.changepoint_rate() * h.powi(3) / 3.0).sqrt()
    }
}
