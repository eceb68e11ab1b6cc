//! Standard scaler configuration

use serde::{Deserialize, Serialize};

/// Standard scaler toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalerConfig {
    /// Subtract the column mean
    pub with_mean: bool,
    /// Divide by the column standard deviation
    pub with_std: bool,
}

impl ScalerConfig {
    pub fn new(with_mean: bool, with_std: bool) -> Self {
        Self {
            with_mean,
            with_std,
        }
    }
}

impl Default for ScalerConfig {
    fn default() -> Self {
        Self::new(true, true)
    }
}
