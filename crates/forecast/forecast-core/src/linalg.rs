//! Dense ridge regression solver

use forecast_spi::{ForecastError, Result};

/// Pivots smaller than this mean the system is numerically singular.
const PIVOT_EPSILON: f64 = 1e-14;

/// Solve `(XᵀX + diag(penalties)) β = Xᵀy` by Gaussian elimination with
/// partial pivoting.
///
/// `x` is row-major with one penalty per column.
pub fn ridge_solve(x: &[Vec<f64>], y: &[f64], penalties: &[f64]) -> Result<Vec<f64>> {
    let p = penalties.len();
    if x.len() != y.len() {
        return Err(ForecastError::InvalidData(format!(
            "{} design rows but {} targets",
            x.len(),
            y.len()
        )));
    }
    if p == 0 {
        return Ok(Vec::new());
    }

    let mut a = vec![vec![0.0; p]; p];
    let mut b = vec![0.0; p];
    for (row, &target) in x.iter().zip(y.iter()) {
        if row.len() != p {
            return Err(ForecastError::InvalidData(format!(
                "design row has {} columns, expected {}",
                row.len(),
                p
            )));
        }
        for i in 0..p {
            let xi = row[i];
            if xi == 0.0 {
                continue;
            }
            b[i] += xi * target;
            for j in i..p {
                a[i][j] += xi * row[j];
            }
        }
    }
    for i in 0..p {
        for j in 0..i {
            a[i][j] = a[j][i];
        }
        a[i][i] += penalties[i];
    }

    for col in 0..p {
        let pivot_row = (col..p)
            .max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))
            .unwrap_or(col);
        if a[pivot_row][col].abs() < PIVOT_EPSILON {
            return Err(ForecastError::NumericalError(format!(
                "singular system at column {}",
                col
            )));
        }
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let inv = 1.0 / a[col][col];
        for r in (col + 1)..p {
            let factor = a[r][col] * inv;
            if factor == 0.0 {
                continue;
            }
            for c in col..p {
                a[r][c] -= factor * a[col][c];
            }
            b[r] -= factor * b[col];
        }
    }

    let mut beta = vec![0.0; p];
    for i in (0..p).rev() {
        let tail: f64 = ((i + 1)..p).map(|j| a[i][j] * beta[j]).sum();
        beta[i] = (b[i] - tail) / a[i][i];
    }

    if beta.iter().any(|v| !v.is_finite()) {
        return Err(ForecastError::NumericalError(
            "non-finite coefficients".to_string(),
        ));
    }
    Ok(beta)
}

/// Dot product of a design row with coefficients.
pub fn dot(row: &[f64], beta: &[f64]) -> f64 {
    row.iter().zip(beta.iter()).map(|(a, b)| a * b).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit_without_penalty() {
        // y = 2 + 3x
        let x: Vec<Vec<f64>> = (0..5).map(|i| vec![1.0, i as f64]).collect();
        let y: Vec<f64> = (0..5).map(|i| 2.0 + 3.0 * i as f64).collect();

        let beta = ridge_solve(&x, &y, &[1e-12, 1e-12]).unwrap();

        assert!((beta[0] - 2.0).abs() < 1e-8);
        assert!((beta[1] - 3.0).abs() < 1e-8);
    }

    #[test]
    fn test_penalty_shrinks_coefficient() {
        let x: Vec<Vec<f64>> = (0..10).map(|i| vec![i as f64]).collect();
        let y: Vec<f64> = (0..10).map(|i| i as f64).collect();

        let free = ridge_solve(&x, &y, &[1e-12]).unwrap()[0];
        let shrunk = ridge_solve(&x, &y, &[285.0]).unwrap()[0];

        assert!((free - 1.0).abs() < 1e-10);
        // XᵀX = 285, so the penalty halves the coefficient
        assert!((shrunk - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_collinear_columns_with_penalty() {
        let x: Vec<Vec<f64>> = (0..6).map(|i| vec![i as f64, i as f64]).collect();
        let y: Vec<f64> = (0..6).map(|i| 2.0 * i as f64).collect();

        let beta = ridge_solve(&x, &y, &[1e-6, 1e-6]).unwrap();
        assert!((beta[0] - beta[1]).abs() < 1e-6);
        assert!((beta[0] + beta[1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_singular_without_penalty() {
        let x = vec![vec![0.0, 1.0], vec![0.0, 2.0]];
        let err = ridge_solve(&x, &[1.0, 2.0], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, ForecastError::NumericalError(_)));
    }

    #[test]
    fn test_shape_errors() {
        assert!(ridge_solve(&[vec![1.0]], &[1.0, 2.0], &[0.0]).is_err());
        assert!(ridge_solve(&[vec![1.0, 2.0]], &[1.0], &[0.0]).is_err());
        assert!(ridge_solve(&[vec![]], &[1.0], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_dot() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
    }
}
