//! Best-split search over squared error

use std::cmp::Ordering;

/// Decreases at or below this are treated as no improvement.
pub(crate) const MIN_DECREASE: f64 = 1e-12;

/// Candidate split of a node
#[derive(Debug, Clone, Copy)]
pub(crate) struct Split {
    pub feature: usize,
    pub threshold: f64,
    /// Reduction in summed squared error
    pub decrease: f64,
}

/// Sum of squared deviations from the mean of the selected targets.
pub(crate) fn sum_squared_error(y: &[f64], indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    let n = indices.len() as f64;
    let mean = indices.iter().map(|&i| y[i]).sum::<f64>() / n;
    indices.iter().map(|&i| (y[i] - mean).powi(2)).sum()
}

/// Mean of the selected targets.
pub(crate) fn mean_target(y: &[f64], indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64
}

/// Find the split with the largest squared-error decrease.
///
/// Features are visited in the given order and a later feature only wins
/// with a strictly larger decrease. Thresholds sit halfway between adjacent
/// distinct values, and both children keep at least `min_samples_leaf` rows.
pub(crate) fn best_split(
    x: &[Vec<f64>],
    y: &[f64],
    indices: &[usize],
    features: &[usize],
    min_samples_leaf: usize,
) -> Option<Split> {
    let n = indices.len();
    if n < 2 * min_samples_leaf {
        return None;
    }

    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let total_sq_sum: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
    let parent_sse = total_sq_sum - total_sum * total_sum / n as f64;

    let mut best: Option<Split> = None;
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(n);

    for &feature in features {
        pairs.clear();
        pairs.extend(indices.iter().map(|&i| (x[i][feature], y[i])));
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

        // Running sums give each child's squared error in O(1) per position
        let mut left_sum = 0.0;
        let mut left_sq_sum = 0.0;

        for pos in 0..n - 1 {
            let (value, target) = pairs[pos];
            left_sum += target;
            left_sq_sum += target * target;

            let next_value = pairs[pos + 1].0;
            if next_value <= value {
                continue;
            }

            let left_n = pos + 1;
            let right_n = n - left_n;
            if left_n < min_samples_leaf || right_n < min_samples_leaf {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq_sum = total_sq_sum - left_sq_sum;
            let left_sse = left_sq_sum - left_sum * left_sum / left_n as f64;
            let right_sse = right_sq_sum - right_sum * right_sum / right_n as f64;
            let decrease = parent_sse - left_sse - right_sse;

            let best_decrease = best.map_or(MIN_DECREASE, |s| s.decrease);
            if decrease > best_decrease {
                best = Some(Split {
                    feature,
                    threshold: midpoint(value, next_value),
                    decrease,
                });
            }
        }
    }

    best
}

/// Midpoint of two adjacent values that still separates them.
fn midpoint(low: f64, high: f64) -> f64 {
    let mid = low / 2.0 + high / 2.0;
    if mid >= high || !mid.is_finite() {
        low
    } else {
        mid
    }
}

/// Split row indices by `x[feature] <= threshold`.
pub(crate) fn partition(
    x: &[Vec<f64>],
    indices: &[usize],
    feature: usize,
    threshold: f64,
) -> (Vec<usize>, Vec<usize>) {
    indices
        .iter()
        .partition(|&&i| x[i][feature] <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(values: &[f64]) -> Vec<Vec<f64>> {
        values.iter().map(|&v| vec![v]).collect()
    }

    #[test]
    fn test_sum_squared_error() {
        let y = vec![1.0, 2.0, 3.0];
        assert!((sum_squared_error(&y, &[0, 1, 2]) - 2.0).abs() < 1e-12);
        assert_eq!(sum_squared_error(&y, &[]), 0.0);
    }

    #[test]
    fn test_mean_target() {
        let y = vec![1.0, 2.0, 6.0];
        assert!((mean_target(&y, &[0, 2]) - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_best_split_finds_step() {
        let x = column(&[1.0, 2.0, 3.0, 10.0, 11.0, 12.0]);
        let y = vec![0.0, 0.0, 0.0, 5.0, 5.0, 5.0];
        let indices: Vec<usize> = (0..6).collect();

        let split = best_split(&x, &y, &indices, &[0], 1).unwrap();

        assert_eq!(split.feature, 0);
        assert!((split.threshold - 6.5).abs() < 1e-12);
        assert!((split.decrease - 37.5).abs() < 1e-9);
    }

    #[test]
    fn test_best_split_skips_equal_values() {
        let x = column(&[1.0, 1.0, 1.0]);
        let y = vec![0.0, 1.0, 2.0];
        assert!(best_split(&x, &y, &[0, 1, 2], &[0], 1).is_none());
    }

    #[test]
    fn test_best_split_respects_min_samples_leaf() {
        let x = column(&[1.0, 2.0, 3.0, 4.0]);
        let y = vec![0.0, 10.0, 10.0, 10.0];

        let split = best_split(&x, &y, &[0, 1, 2, 3], &[0], 2).unwrap();
        assert!((split.threshold - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_best_split_pure_node_has_no_split() {
        let x = column(&[1.0, 2.0, 3.0]);
        let y = vec![4.0, 4.0, 4.0];
        assert!(best_split(&x, &y, &[0, 1, 2], &[0], 1).is_none());
    }

    #[test]
    fn test_tie_keeps_first_feature() {
        let x = vec![vec![1.0, 1.0], vec![2.0, 2.0]];
        let y = vec![0.0, 1.0];

        assert_eq!(best_split(&x, &y, &[0, 1], &[1, 0], 1).unwrap().feature, 1);
        assert_eq!(best_split(&x, &y, &[0, 1], &[0, 1], 1).unwrap().feature, 0);
    }

    #[test]
    fn test_midpoint_of_adjacent_floats() {
        let low: f64 = 1.0;
        let high = f64::from_bits(low.to_bits() + 1);
        assert_eq!(midpoint(low, high), low);
        assert_eq!(midpoint(1.0, 2.0), 1.5);
    }

    #[test]
    fn test_partition() {
        let x = column(&[1.0, 5.0, 2.0, 7.0]);
        let (left, right) = partition(&x, &[0, 1, 2, 3], 0, 3.0);
        assert_eq!(left, vec![0, 2]);
        assert_eq!(right, vec![1, 3]);
    }
}
