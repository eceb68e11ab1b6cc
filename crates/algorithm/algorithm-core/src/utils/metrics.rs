//! Regression accuracy metrics
//!
//! Provides the error metrics reported for a fitted regressor.

use algorithm_spi::{ModelError, RegressionMetrics, Result};

/// Mean Absolute Error (MAE)
///
/// Average of absolute differences between predictions and actual values.
/// Same scale as the data. Returns NaN for empty or mismatched inputs.
///
/// # Example
///
/// ```rust
/// use algorithm_core::utils::metrics::mae;
///
/// let actual = vec![1.0, 2.0, 3.0];
/// let predicted = vec![1.5, 2.0, 2.5];
/// assert!((mae(&actual, &predicted) - 1.0 / 3.0).abs() < 1e-12);
/// ```
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum();

    sum / actual.len() as f64
}

/// Mean Squared Error (MSE)
///
/// Average of squared differences. Penalizes large errors more heavily.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    sum / actual.len() as f64
}

/// R-squared (Coefficient of Determination)
///
/// 1.0 = perfect, 0.0 = same as mean prediction, negative = worse than mean.
/// A constant target scores 1.0 when predicted exactly and 0.0 otherwise.
pub fn r_squared(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }

    let mean = actual.iter().sum::<f64>() / actual.len() as f64;

    let ss_tot: f64 = actual.iter().map(|a| (a - mean).powi(2)).sum();
    let ss_res: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum();

    if ss_tot < 1e-12 {
        return if ss_res < 1e-12 { 1.0 } else { 0.0 };
    }

    1.0 - ss_res / ss_tot
}

/// Compute MSE, MAE and R² at once
pub fn evaluate(actual: &[f64], predicted: &[f64]) -> Result<RegressionMetrics> {
    if actual.is_empty() {
        return Err(ModelError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    if actual.len() != predicted.len() {
        return Err(ModelError::DimensionMismatch {
            expected: actual.len(),
            actual: predicted.len(),
        });
    }

    Ok(RegressionMetrics::new(
        mse(actual, predicted),
        mae(actual, predicted),
        r_squared(actual, predicted),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mae() {
        let actual = vec![1.0, 2.0, 3.0, 4.0];
        let predicted = vec![1.5, 2.0, 2.0, 4.5];
        assert!((mae(&actual, &predicted) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_mse() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 1.0];
        assert!((mse(&actual, &predicted) - 5.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_prediction() {
        let actual = vec![0.5, 1.0, 5.25];
        assert_eq!(mse(&actual, &actual), 0.0);
        assert_eq!(mae(&actual, &actual), 0.0);
        assert!((r_squared(&actual, &actual) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_mean_prediction_is_zero() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![2.0, 2.0, 2.0];
        assert!(r_squared(&actual, &predicted).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_can_be_negative() {
        let actual = vec![1.0, 2.0, 3.0];
        let predicted = vec![3.0, 2.0, 1.0];
        assert!((r_squared(&actual, &predicted) + 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target() {
        let actual = vec![2.0, 2.0, 2.0];
        assert_eq!(r_squared(&actual, &[2.0, 2.0, 2.0]), 1.0);
        assert_eq!(r_squared(&actual, &[2.0, 2.5, 2.0]), 0.0);
    }

    #[test]
    fn test_mismatched_lengths_are_nan() {
        assert!(mae(&[1.0], &[1.0, 2.0]).is_nan());
        assert!(mse(&[], &[]).is_nan());
        assert!(r_squared(&[1.0, 2.0], &[1.0]).is_nan());
    }

    #[test]
    fn test_evaluate() {
        let m = evaluate(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]).unwrap();
        assert!((m.mse - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.mae - 1.0 / 3.0).abs() < 1e-12);
        assert!((m.r2 - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_errors() {
        assert!(matches!(
            evaluate(&[], &[]),
            Err(ModelError::InsufficientData { .. })
        ));
        assert_eq!(
            evaluate(&[1.0, 2.0], &[1.0]).unwrap_err(),
            ModelError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
