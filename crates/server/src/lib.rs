//! # ratecast-server
//!
//! REST API for blended interest rate predictions.
//!
//! The models are trained once before the listener is bound; handlers only
//! read the shared [`RatePredictor`].

use std::path::Path;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use data_facade::{CsvDataSource, DataSource};
use predictor_facade::{PredictionService, PredictorConfig, RatePredictor};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn RatePredictor>,
}

/// Build the router with CORS open to every origin.
pub fn app(predictor: Arc<dyn RatePredictor>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints (Kubernetes-compatible)
        .route("/health/live", get(routes::liveness))
        .route("/health/ready", get(routes::readiness))
        .route("/health", get(routes::liveness))
        // API endpoints
        .route("/predict", post(routes::predict))
        .route("/model", get(routes::model))
        // Middleware layers
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(AppState { predictor })
}

/// Load the dataset and fit every model.
///
/// Blocking; call it from `spawn_blocking` inside the runtime.
pub fn train(path: &Path, config: PredictorConfig) -> anyhow::Result<PredictionService> {
    let dataset = CsvDataSource::from_path(path).load()?;
    let service = PredictionService::train(&dataset, config)?;
    Ok(service)
}
