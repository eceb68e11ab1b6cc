//! API route handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use predictor_facade::{ModelSummary, PredictionRequest, PredictionResponse};

use crate::error::ApiError;
use crate::AppState;

/// Liveness probe - is the server running?
pub async fn liveness() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Readiness probe - are the models loaded?
///
/// The router only exists once training has finished, so a response always
/// reports the fitted models.
pub async fn readiness(State(state): State<AppState>) -> Json<serde_json::Value> {
    let summary = state.predictor.summary();
    Json(serde_json::json!({
        "status": "ready",
        "version": env!("CARGO_PKG_VERSION"),
        "checks": [
            { "name": "server", "status": "Healthy" },
            {
                "name": "models",
                "status": "Healthy",
                "message": format!("trained on {} records", summary.records)
            }
        ]
    }))
}

pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.predictor.predict(&request)?;
    Ok(Json(response))
}

pub async fn model(State(state): State<AppState>) -> Json<ModelSummary> {
    Json(state.predictor.summary())
}
