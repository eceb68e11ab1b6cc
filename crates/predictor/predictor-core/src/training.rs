//! One-shot training step

use std::fmt::Display;
use std::time::Instant;

use algorithm_core::utils::metrics::evaluate;
use algorithm_core::{
    DecisionTreeRegressor, FeatureTransformer, RegressionMetrics, Regressor, StandardScaler,
};
use data_spi::{Dataset, FEATURE_COLUMNS, TARGET_COLUMN};
use forecast_core::{AdditiveForecaster, Forecaster, TimeSeriesFrame};
use predictor_api::PredictorConfig;
use predictor_spi::{ModelSummary, PredictorError, Result, TreeSummary};

/// Models fitted on the full dataset
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TrainedModels {
    scaler: StandardScaler,
    tree: DecisionTreeRegressor,
    forecaster: AdditiveForecaster,
    metrics: RegressionMetrics,
    summary: ModelSummary,
}

impl TrainedModels {
    /// Fit the scaler, tree and forecaster on every record.
    ///
    /// Tree metrics are computed in-sample. Every failure is reported as
    /// [`PredictorError::Training`].
    pub fn train(dataset: &Dataset, config: &PredictorConfig) -> Result<Self> {
        config.validate()?;
        let (first_date, last_date) = dataset
            .date_range()
            .ok_or_else(|| PredictorError::Training("dataset is empty".to_string()))?;

        tracing::info!(
            "Training on {} records from {} to {}",
            dataset.len(),
            first_date,
            last_date
        );

        let x = dataset.feature_matrix();
        let y = dataset.targets();

        let started = Instant::now();
        let mut scaler = StandardScaler::with_config(config.scaler);
        let scaled = scaler.fit_transform(&x).map_err(training_error)?;

        let mut tree = DecisionTreeRegressor::with_config(config.tree);
        tree.fit(&scaled, &y).map_err(training_error)?;
        let fitted = tree.predict(&scaled).map_err(training_error)?;
        let metrics = evaluate(&y, &fitted).map_err(training_error)?;
        tracing::info!(
            "Tree fitted in {:?}: depth {}, {} leaves, mse {:.6}, mae {:.6}, r2 {:.6}",
            started.elapsed(),
            tree.depth(),
            tree.n_leaves(),
            metrics.mse,
            metrics.mae,
            metrics.r2
        );

        let started = Instant::now();
        let frame = build_frame(dataset)?;
        let mut forecaster = AdditiveForecaster::with_config(config.forecaster.clone());
        for name in FEATURE_COLUMNS {
            forecaster.add_regressor(name).map_err(training_error)?;
        }
        forecaster.fit(&frame).map_err(training_error)?;
        let fit_summary = forecaster
            .summary()
            .ok_or_else(|| PredictorError::Training("forecaster did not fit".to_string()))?;
        tracing::info!(
            "Forecaster fitted in {:?}: {} changepoints, seasonalities {:?}, sigma {:.6}",
            started.elapsed(),
            fit_summary.n_changepoints,
            fit_summary.seasonalities,
            fit_summary.sigma_obs
        );

        let summary = ModelSummary {
            records: dataset.len(),
            first_date,
            last_date,
            features: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            target: TARGET_COLUMN.to_string(),
            tree: TreeSummary {
                depth: tree.depth(),
                n_leaves: tree.n_leaves(),
                feature_importances: tree.feature_importances().to_vec(),
            },
            forecaster: fit_summary,
            tree_metrics: metrics.into(),
        };

        Ok(Self {
            scaler,
            tree,
            forecaster,
            metrics,
            summary,
        })
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn tree(&self) -> &DecisionTreeRegressor {
        &self.tree
    }

    pub fn forecaster(&self) -> &AdditiveForecaster {
        &self.forecaster
    }

    /// In-sample tree metrics, unrounded
    pub fn metrics(&self) -> RegressionMetrics {
        self.metrics
    }

    pub fn summary(&self) -> &ModelSummary {
        &self.summary
    }
}

/// Target series with the raw predictors as named regressors.
fn build_frame(dataset: &Dataset) -> Result<TimeSeriesFrame> {
    let mut frame =
        TimeSeriesFrame::new(dataset.dates(), dataset.targets()).map_err(training_error)?;
    for (index, name) in FEATURE_COLUMNS.iter().enumerate() {
        frame = frame
            .with_regressor(name, dataset.feature_column(index))
            .map_err(training_error)?;
    }
    Ok(frame)
}

fn training_error(err: impl Display) -> PredictorError {
    PredictorError::Training(err.to_string())
}
