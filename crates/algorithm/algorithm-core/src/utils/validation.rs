//! Input validation for feature matrices
//!
//! Shared shape and value checks run before any model is fitted.

use algorithm_spi::{ModelError, Result};

/// Check that `x` is non-empty, rectangular and finite, and return its width.
pub fn check_matrix(x: &[Vec<f64>]) -> Result<usize> {
    let width = match x.first() {
        Some(row) => row.len(),
        None => {
            return Err(ModelError::InsufficientData {
                required: 1,
                actual: 0,
            })
        }
    };
    if width == 0 {
        return Err(ModelError::InvalidData("rows have no features".to_string()));
    }

    for (i, row) in x.iter().enumerate() {
        if row.len() != width {
            return Err(ModelError::DimensionMismatch {
                expected: width,
                actual: row.len(),
            });
        }
        if row.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidData(format!(
                "row {} contains non-finite values",
                i
            )));
        }
    }

    Ok(width)
}

/// Check that a target vector matches the matrix height and is finite.
pub fn check_target(x: &[Vec<f64>], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(ModelError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    if y.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::InvalidData(
            "target contains non-finite values".to_string(),
        ));
    }
    Ok(())
}

/// Check a single row against the fitted width.
pub fn check_row(row: &[f64], width: usize) -> Result<()> {
    if row.len() != width {
        return Err(ModelError::DimensionMismatch {
            expected: width,
            actual: row.len(),
        });
    }
    Ok(())
}
