mod binned_features;
mod boosted_trees;
mod regression_tree;

pub use binned_features::MAX_CUTS;
pub use boosted_trees::{BoostedTrees, BoostedTreesModel};
