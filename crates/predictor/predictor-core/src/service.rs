//! Prediction service

use std::sync::Arc;

use algorithm_core::{FeatureTransformer, Regressor};
use data_spi::{parse_date, Dataset, FeatureVector};
use forecast_core::{Forecaster, FuturePoint};
use predictor_api::PredictorConfig;
use predictor_spi::{
    ModelSummary, PredictionRequest, PredictionResponse, RatePredictor, Result, TreeMetrics,
};

use crate::blend::{blend, clamp_non_negative, round_to};
use crate::training::TrainedModels;

/// Serves blended rate predictions from [`TrainedModels`]
///
/// Cheap to clone; clones share the fitted models.
///
/// # Example
///
/// ```rust,ignore
/// use predictor_core::{PredictionService, RatePredictor, PredictionRequest};
///
/// let service = PredictionService::train(&dataset, PredictorConfig::default())?;
/// let response = service.predict(&PredictionRequest::new(
///     vec![4.5, 3.1, 2.9, 4.2, 0.8, 1.4],
///     "2024-05-01",
/// ))?;
/// println!("{}", response.combined_rate);
/// ```
#[derive(Debug, Clone)]
pub struct PredictionService {
    models: Arc<TrainedModels>,
    config: PredictorConfig,
    tree_metrics: TreeMetrics,
}

impl PredictionService {
    /// Wrap already trained models.
    pub fn new(models: TrainedModels, config: PredictorConfig) -> Self {
        let decimals = config.precision.metric_decimals;
        let metrics = models.metrics();
        let tree_metrics = TreeMetrics {
            mse: round_to(metrics.mse, decimals),
            mae: round_to(metrics.mae, decimals),
            r2: round_to(metrics.r2, decimals),
        };
        Self {
            models: Arc::new(models),
            config,
            tree_metrics,
        }
    }

    /// Train on a dataset and wrap the result.
    pub fn train(dataset: &Dataset, config: PredictorConfig) -> Result<Self> {
        let models = TrainedModels::train(dataset, &config)?;
        Ok(Self::new(models, config))
    }

    pub fn models(&self) -> &TrainedModels {
        &self.models
    }

    pub fn config(&self) -> &PredictorConfig {
        &self.config
    }
}

impl RatePredictor for PredictionService {
    fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let features = FeatureVector::from_slice(&request.features)?;
        let date = parse_date(&request.date)?;

        let scaled = self.models.scaler().transform_row(features.as_slice())?;
        let tree = self.models.tree().predict_one(&scaled)?;

        let point = self
            .models
            .forecaster()
            .forecast_one(&FuturePoint::new(date, features.to_vec()))?;
        let yhat = clamp_non_negative(point.yhat);
        let lower = clamp_non_negative(point.yhat_lower);
        let upper = clamp_non_negative(point.yhat_upper);

        let combined = blend(point.yhat, yhat, tree, &self.config.blend);
        tracing::debug!(
            "Prediction for {}: tree {:.6}, forecast {:.6}, combined {:.6}",
            date,
            tree,
            yhat,
            combined
        );

        let decimals = self.config.precision.prediction_decimals;
        Ok(PredictionResponse {
            tree_prediction: round_to(tree, decimals),
            prophet_prediction: round_to(yhat, decimals),
            combined_rate: round_to(combined, decimals),
            confidence_interval: [round_to(lower, decimals), round_to(upper, decimals)],
            tree_metrics: self.tree_metrics,
        })
    }

    fn summary(&self) -> ModelSummary {
        self.models.summary().clone()
    }
}
