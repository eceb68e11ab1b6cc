//! Predictor configuration

use algorithm_api::{ScalerConfig, TreeConfig};
use forecast_api::ForecasterConfig;
use predictor_spi::{PredictorError, Result};
use serde::{Deserialize, Serialize};

/// Weights used to combine the two estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendConfig {
    /// Weight of the time-series estimate
    pub forecast_weight: f64,
    /// Weight of the tree estimate
    pub tree_weight: f64,
    /// The time-series estimate is only blended in above this value
    pub forecast_threshold: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            forecast_weight: 0.6,
            tree_weight: 0.4,
            forecast_threshold: 0.0,
        }
    }
}

/// Decimal places applied to the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecisionConfig {
    pub prediction_decimals: u32,
    pub metric_decimals: u32,
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self {
            prediction_decimals: 3,
            metric_decimals: 4,
        }
    }
}

/// Full configuration of the training step and prediction service
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PredictorConfig {
    pub scaler: ScalerConfig,
    pub tree: TreeConfig,
    pub forecaster: ForecasterConfig,
    pub blend: BlendConfig,
    pub precision: PrecisionConfig,
}

impl PredictorConfig {
    /// Check every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.tree
            .validate()
            .map_err(|e| PredictorError::Training(e.to_string()))?;
        self.forecaster
            .validate()
            .map_err(|e| PredictorError::Training(e.to_string()))?;

        let BlendConfig {
            forecast_weight,
            tree_weight,
            forecast_threshold,
        } = self.blend;
        if !(forecast_weight.is_finite() && tree_weight.is_finite() && forecast_threshold.is_finite())
        {
            return Err(PredictorError::Training(
                "blend weights must be finite".to_string(),
            ));
        }
        if forecast_weight < 0.0 || tree_weight < 0.0 {
            return Err(PredictorError::Training(
                "blend weights must not be negative".to_string(),
            ));
        }
        if self.precision.prediction_decimals > 15 || self.precision.metric_decimals > 15 {
            return Err(PredictorError::Training(
                "at most 15 decimals are supported".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for PredictorConfig
#[derive(Debug, Clone, Default)]
pub struct PredictorConfigBuilder {
    config: PredictorConfig,
}

impl PredictorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scaler(mut self, scaler: ScalerConfig) -> Self {
        self.config.scaler = scaler;
        self
    }

    pub fn tree(mut self, tree: TreeConfig) -> Self {
        self.config.tree = tree;
        self
    }

    pub fn forecaster(mut self, forecaster: ForecasterConfig) -> Self {
        self.config.forecaster = forecaster;
        self
    }

    /// Set the blend weights.
    pub fn blend(mut self, forecast_weight: f64, tree_weight: f64) -> Self {
        self.config.blend.forecast_weight = forecast_weight;
        self.config.blend.tree_weight = tree_weight;
        self
    }

    pub fn forecast_threshold(mut self, threshold: f64) -> Self {
        self.config.blend.forecast_threshold = threshold;
        self
    }

    /// Set the rounding precision of predictions and metrics.
    pub fn precision(mut self, prediction_decimals: u32, metric_decimals: u32) -> Self {
        self.config.precision = PrecisionConfig {
            prediction_decimals,
            metric_decimals,
        };
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<PredictorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
