//! Prediction interval helpers
//!
//! Intervals are symmetric normal bands around the point forecast.

use forecast_spi::{ForecastError, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided standard normal quantile for an interval width.
///
/// `0.80` gives about `1.2816`, `0.95` about `1.96`.
pub fn z_value(interval_width: f64) -> Result<f64> {
    if !(interval_width > 0.0 && interval_width < 1.0) {
        return Err(ForecastError::InvalidParameter {
            name: "interval_width".to_string(),
            reason: "must be in (0, 1)".to_string(),
        });
    }
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| ForecastError::NumericalError(e.to_string()))?;
    Ok(normal.inverse_cdf(0.5 + interval_width / 2.0))
}

/// Combine observation noise and trend uncertainty into one standard deviation.
pub fn combined_sd(sigma_obs: f64, trend_sd: f64) -> f64 {
    (sigma_obs.powi(2) + trend_sd.powi(2)).sqrt()
}

/// Lower and upper bound of a band of `z` standard deviations.
pub fn band(center: f64, sd: f64, z: f64) -> (f64, f64) {
    (center - z * sd, center + z * sd)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_z_value_known_widths() {
        assert!((z_value(0.80).unwrap() - 1.281_551_565_5).abs() < 1e-6);
        assert!((z_value(0.95).unwrap() - 1.959_963_985).abs() < 1e-6);
        assert!((z_value(0.99).unwrap() - 2.575_829_304).abs() < 1e-6);
    }

    #[test]
    fn test_z_value_rejects_out_of_range() {
        assert!(z_value(0.0).is_err());
        assert!(z_value(1.0).is_err());
        assert!(z_value(f64::NAN).is_err());
    }

    #[test]
    fn test_combined_sd() {
        assert!((combined_sd(3.0, 4.0) - 5.0).abs() < 1e-12);
        assert_eq!(combined_sd(0.5, 0.0), 0.5);
    }

    #[test]
    fn test_band_is_symmetric() {
        let (lo, hi) = band(10.0, 2.0, 1.5);
        assert_eq!(lo, 7.0);
        assert_eq!(hi, 13.0);
    }
}
