//! Clamping, blending and rounding of the two estimates

use predictor_api::BlendConfig;

/// Round to a number of decimal places, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Replace negative values by zero.
///
/// NaN maps to zero as well.
pub fn clamp_non_negative(value: f64) -> f64 {
    value.max(0.0)
}

/// Combine the time-series and tree estimates.
///
/// The threshold is tested against `raw_forecast`, the unclamped model
/// output. When it is strictly above the threshold the weighted sum uses the
/// clamped `forecast`; otherwise the tree estimate is returned unchanged.
pub fn blend(raw_forecast: f64, forecast: f64, tree: f64, config: &BlendConfig) -> f64 {
    if raw_forecast > config.forecast_threshold {
        config.forecast_weight * forecast + config.tree_weight * tree
    } else {
        tree
    }
}
