//! Fitted forecaster description

use serde::{Deserialize, Serialize};

/// Components and noise level of a fitted forecaster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitSummary {
    /// Number of trend changepoints
    pub n_changepoints: usize,
    /// Names of the active seasonal components
    pub seasonalities: Vec<String>,
    /// Extra regressors in registration order
    pub regressors: Vec<String>,
    /// Residual standard deviation, in target units
    pub sigma_obs: f64,
    /// Width of the reported interval
    pub interval_width: f64,
}
