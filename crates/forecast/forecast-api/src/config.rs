//! Forecaster configuration

use forecast_spi::{ForecastError, Result};
use serde::{Deserialize, Serialize};

/// Whether a seasonal component is fitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalityMode {
    /// Decide from the spacing and span of the history
    #[default]
    Auto,
    Enabled,
    Disabled,
}

/// Configuration for the additive forecaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecasterConfig {
    pub yearly_seasonality: SeasonalityMode,
    pub weekly_seasonality: SeasonalityMode,
    /// Fourier order of the yearly component
    pub yearly_fourier_order: usize,
    /// Fourier order of the weekly component
    pub weekly_fourier_order: usize,
    /// Number of potential trend changepoints
    pub n_changepoints: usize,
    /// Share of the history in which changepoints are placed
    pub changepoint_range: f64,
    /// Prior scale of the changepoint deltas
    pub changepoint_prior_scale: f64,
    /// Prior scale of the Fourier coefficients
    pub seasonality_prior_scale: f64,
    /// Prior scale of the regressor coefficients
    pub regressor_prior_scale: f64,
    /// Coverage of the reported interval
    pub interval_width: f64,
}

impl Default for ForecasterConfig {
    fn default() -> Self {
        Self {
            yearly_seasonality: SeasonalityMode::Enabled,
            weekly_seasonality: SeasonalityMode::Auto,
            yearly_fourier_order: 10,
            weekly_fourier_order: 3,
            n_changepoints: 25,
            changepoint_range: 0.8,
            changepoint_prior_scale: 0.05,
            seasonality_prior_scale: 10.0,
            regressor_prior_scale: 10.0,
            interval_width: 0.80,
        }
    }
}

impl ForecasterConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.changepoint_range > 0.0 && self.changepoint_range <= 1.0) {
            return Err(invalid("changepoint_range", "must be in (0, 1]"));
        }
        if !(self.interval_width > 0.0 && self.interval_width < 1.0) {
            return Err(invalid("interval_width", "must be in (0, 1)"));
        }
        for (name, value) in [
            ("changepoint_prior_scale", self.changepoint_prior_scale),
            ("seasonality_prior_scale", self.seasonality_prior_scale),
            ("regressor_prior_scale", self.regressor_prior_scale),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid(name, "must be positive"));
            }
        }
        if self.yearly_seasonality != SeasonalityMode::Disabled && self.yearly_fourier_order == 0 {
            return Err(invalid("yearly_fourier_order", "must be at least 1"));
        }
        if self.weekly_seasonality != SeasonalityMode::Disabled && self.weekly_fourier_order == 0 {
            return Err(invalid("weekly_fourier_order", "must be at least 1"));
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: &str) -> ForecastError {
    ForecastError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Builder for ForecasterConfig
#[derive(Debug, Clone, Default)]
pub struct ForecasterConfigBuilder {
    config: ForecasterConfig,
}

impl ForecasterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn yearly_seasonality(mut self, mode: SeasonalityMode) -> Self {
        self.config.yearly_seasonality = mode;
        self
    }

    pub fn weekly_seasonality(mut self, mode: SeasonalityMode) -> Self {
        self.config.weekly_seasonality = mode;
        self
    }

    pub fn yearly_fourier_order(mut self, order: usize) -> Self {
        self.config.yearly_fourier_order = order;
        self
    }

    pub fn weekly_fourier_order(mut self, order: usize) -> Self {
        self.config.weekly_fourier_order = order;
        self
    }

    pub fn n_changepoints(mut self, n: usize) -> Self {
        self.config.n_changepoints = n;
        self
    }

    pub fn changepoint_range(mut self, range: f64) -> Self {
        self.config.changepoint_range = range;
        self
    }

    pub fn changepoint_prior_scale(mut self, scale: f64) -> Self {
        self.config.changepoint_prior_scale = scale;
        self
    }

    pub fn seasonality_prior_scale(mut self, scale: f64) -> Self {
        self.config.seasonality_prior_scale = scale;
        self
    }

    pub fn regressor_prior_scale(mut self, scale: f64) -> Self {
        self.config.regressor_prior_scale = scale;
        self
    }

    pub fn interval_width(mut self, width: f64) -> Self {
        self.config.interval_width = width;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<ForecasterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
