//! Decision tree configuration.

use algorithm_spi::{ModelError, Result};
use serde::{Deserialize, Serialize};

/// Seed used for the per-node feature order when none is given.
pub const DEFAULT_RANDOM_STATE: u64 = 42;

/// Growth limits for a CART regression tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum depth; `None` grows until leaves are pure
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs to be split
    pub min_samples_split: usize,
    /// Minimum samples each child must keep
    pub min_samples_leaf: usize,
    /// Seed for the feature visiting order
    pub random_state: u64,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            random_state: DEFAULT_RANDOM_STATE,
        }
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(invalid("max_depth", "must be at least 1"));
        }
        if self.min_samples_split < 2 {
            return Err(invalid("min_samples_split", "must be at least 2"));
        }
        if self.min_samples_leaf < 1 {
            return Err(invalid("min_samples_leaf", "must be at least 1"));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(name: &str, reason: &str) -> ModelError {
    ModelError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

/// Builder for TreeConfig.
#[derive(Debug, Clone, Default)]
pub struct TreeConfigBuilder {
    config: TreeConfig,
}

impl TreeConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the tree depth.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = Some(depth);
        self
    }

    /// Set the minimum samples needed to split a node.
    pub fn min_samples_split(mut self, n: usize) -> Self {
        self.config.min_samples_split = n;
        self
    }

    /// Set the minimum samples kept in each leaf.
    pub fn min_samples_leaf(mut self, n: usize) -> Self {
        self.config.min_samples_leaf = n;
        self
    }

    /// Set the seed.
    pub fn random_state(mut self, seed: u64) -> Self {
        self.config.random_state = seed;
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<TreeConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
