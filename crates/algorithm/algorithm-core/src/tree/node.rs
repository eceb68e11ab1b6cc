//! Tree node arena entries

/// A node of a fitted regression tree
///
/// Children are indices into the owning tree's node vector.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Internal node: rows with `x[feature] <= threshold` go left
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
        n_samples: usize,
        impurity_decrease: f64,
    },
    /// Terminal node holding the mean target of its rows
    Leaf { value: f64, n_samples: usize },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeNode::Leaf { .. })
    }

    pub fn n_samples(&self) -> usize {
        match self {
            TreeNode::Split { n_samples, .. } | TreeNode::Leaf { n_samples, .. } => *n_samples,
        }
    }
}
