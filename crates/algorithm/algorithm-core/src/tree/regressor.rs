//! Decision tree regressor

use algorithm_api::TreeConfig;
use algorithm_spi::{ModelError, Regressor, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::node::TreeNode;
use super::split::{best_split, mean_target, partition, sum_squared_error, MIN_DECREASE};
use crate::utils::validation::{check_matrix, check_row, check_target};

/// CART regression tree minimizing squared error
///
/// Grown greedily until leaves are pure or a [`TreeConfig`] limit is hit.
/// At every node the features are tried in an order shuffled by a `StdRng`
/// seeded with `random_state`, so two fits on the same data build the same
/// tree.
///
/// # Example
///
/// ```rust
/// use algorithm_core::prelude::*;
///
/// let x = vec![vec![1.0], vec![2.0], vec![10.0], vec![11.0]];
/// let y = vec![1.0, 1.0, 5.0, 5.0];
///
/// let mut tree = DecisionTreeRegressor::new();
/// tree.fit(&x, &y).unwrap();
/// assert_eq!(tree.predict_one(&[10.5]).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct DecisionTreeRegressor {
    config: TreeConfig,
    nodes: Vec<TreeNode>,
    n_features: usize,
    depth: usize,
    importances: Vec<f64>,
}

impl DecisionTreeRegressor {
    /// Create a tree with default growth limits.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            n_features: 0,
            depth: 0,
            importances: Vec::new(),
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Fitted nodes; the root is at index 0.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Number of features seen during fit
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Longest root-to-leaf path, in edges.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of leaves
    pub fn n_leaves(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Total squared-error decrease per feature, normalized to sum to 1.
    ///
    /// All zeros when the tree is a single leaf.
    pub fn feature_importances(&self) -> &[f64] {
        &self.importances
    }
}

impl Default for DecisionTreeRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl Regressor for DecisionTreeRegressor {
    fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<()> {
        self.config.validate()?;
        let n_features = check_matrix(x)?;
        check_target(x, y)?;

        let mut builder = TreeBuilder {
            x,
            y,
            config: &self.config,
            rng: StdRng::seed_from_u64(self.config.random_state),
            nodes: Vec::new(),
            importances: vec![0.0; n_features],
            max_depth_seen: 0,
        };
        let indices: Vec<usize> = (0..x.len()).collect();
        builder.grow(&indices, 0);

        let total: f64 = builder.importances.iter().sum();
        if total > 0.0 {
            builder.importances.iter_mut().for_each(|v| *v /= total);
        }

        tracing::debug!(
            rows = x.len(),
            nodes = builder.nodes.len(),
            depth = builder.max_depth_seen,
            "decision tree fitted"
        );

        self.nodes = builder.nodes;
        self.importances = builder.importances;
        self.depth = builder.max_depth_seen;
        self.n_features = n_features;
        Ok(())
    }

    fn predict_one(&self, row: &[f64]) -> Result<f64> {
        if self.nodes.is_empty() {
            return Err(ModelError::NotFitted);
        }
        check_row(row, self.n_features)?;

        let mut idx = 0;
        loop {
            match &self.nodes[idx] {
                TreeNode::Leaf { value, .. } => return Ok(*value),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => {
                    idx = if row[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }
}

/// Recursive growth state for one fit
struct TreeBuilder<'a> {
    x: &'a [Vec<f64>],
    y: &'a [f64],
    config: &'a TreeConfig,
    rng: StdRng,
    nodes: Vec<TreeNode>,
    importances: Vec<f64>,
    max_depth_seen: usize,
}

impl TreeBuilder<'_> {
    /// Grow the subtree for `indices` and return its node index.
    fn grow(&mut self, indices: &[usize], depth: usize) -> usize {
        self.max_depth_seen = self.max_depth_seen.max(depth);
        let n_samples = indices.len();

        let at_depth_limit = self.config.max_depth.is_some_and(|d| depth >= d);
        let too_small = n_samples < self.config.min_samples_split;
        let pure = sum_squared_error(self.y, indices) <= MIN_DECREASE;

        if at_depth_limit || too_small || pure {
            return self.push_leaf(indices);
        }

        let mut features: Vec<usize> = (0..self.importances.len()).collect();
        features.shuffle(&mut self.rng);

        let split = match best_split(
            self.x,
            self.y,
            indices,
            &features,
            self.config.min_samples_leaf,
        ) {
            Some(split) => split,
            None => return self.push_leaf(indices),
        };

        let (left_rows, right_rows) = partition(self.x, indices, split.feature, split.threshold);
        if left_rows.is_empty() || right_rows.is_empty() {
            return self.push_leaf(indices);
        }

        // Reserve the slot so the parent precedes its children
        let node_idx = self.nodes.len();
        self.nodes.push(TreeNode::Leaf {
            value: 0.0,
            n_samples: 0,
        });

        let left = self.grow(&left_rows, depth + 1);
        let right = self.grow(&right_rows, depth + 1);

        self.importances[split.feature] += split.decrease;
        self.nodes[node_idx] = TreeNode::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
            n_samples,
            impurity_decrease: split.decrease,
        };
        node_idx
    }

    fn push_leaf(&mut self, indices: &[usize]) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(TreeNode::Leaf {
            value: mean_target(self.y, indices),
            n_samples: indices.len(),
        });
        idx
    }
}
