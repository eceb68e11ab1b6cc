//! CART regression tree
//!
//! A binary tree grown by greedy squared-error splits, stored as a flat node
//! arena.

mod node;
mod regressor;
mod split;

pub use node::TreeNode;
pub use regressor::DecisionTreeRegressor;
