use crate::core::random::Seed;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_n_trees() -> usize {
    500
}
fn default_max_depth() -> usize {
    4
}
fn default_min_samples_leaf() -> usize {
    150
}
fn default_n_cuts() -> usize {
    100
}
fn default_shrinkage() -> f64 {
    0.4
}
fn default_hidden_layers() -> Vec<usize> {
    vec![1]
}
fn default_epochs() -> usize {
    200
}
fn default_learning_rate() -> f64 {
    0.02
}
fn default_decay_rate() -> f64 {
    0.001
}
fn default_mlp_seed() -> Seed {
    Seed::Fixed(0)
}

/// Empty parameter object for estimators without knobs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct NoParams {}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BoostedTreesParameters {
    #[serde(default = "default_n_trees")]
    #[schemars(
        title = "Trees",
        description = "Number of boosting rounds.",
        range(min = 1),
        default = "default_n_trees"
    )]
    pub n_trees: usize,

    #[serde(default = "default_max_depth")]
    #[schemars(
        title = "Maximum depth",
        description = "Depth limit of each regression tree.",
        range(min = 1),
        default = "default_max_depth"
    )]
    pub max_depth: usize,

    #[serde(default = "default_min_samples_leaf")]
    #[schemars(
        title = "Minimum leaf size",
        description = "Samples required on each side of a split.",
        range(min = 1),
        default = "default_min_samples_leaf"
    )]
    pub min_samples_leaf: usize,

    #[serde(default = "default_n_cuts")]
    #[schemars(
        title = "Cuts",
        description = "Candidate thresholds per feature.",
        range(min = 1, max = 65534),
        default = "default_n_cuts"
    )]
    pub n_cuts: usize,

    #[serde(default = "default_shrinkage")]
    #[schemars(
        title = "Shrinkage",
        description = "Learning rate applied to each tree (0–1].",
        range(min = 0.0, max = 1.0),
        default = "default_shrinkage"
    )]
    pub shrinkage: f64,
}

impl Default for BoostedTreesParameters {
    fn default() -> Self {
        Self {
            n_trees: default_n_trees(),
            max_depth: default_max_depth(),
            min_samples_leaf: default_min_samples_leaf(),
            n_cuts: default_n_cuts(),
            shrinkage: default_shrinkage(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MlpParameters {
    #[serde(default = "default_hidden_layers")]
    #[schemars(
        title = "Hidden layers",
        description = "Width of each tanh hidden layer, input side first.",
        default = "default_hidden_layers"
    )]
    pub hidden_layers: Vec<usize>,

    #[serde(default = "default_epochs")]
    #[schemars(
        title = "Epochs",
        description = "Passes over the training set.",
        range(min = 1),
        default = "default_epochs"
    )]
    pub epochs: usize,

    #[serde(default = "default_learning_rate")]
    #[schemars(
        title = "Learning rate",
        description = "Initial SGD step size.",
        default = "default_learning_rate"
    )]
    pub learning_rate: f64,

    #[serde(default = "default_decay_rate")]
    #[schemars(
        title = "Decay rate",
        description = "Per-epoch learning-rate decay.",
        range(min = 0.0),
        default = "default_decay_rate"
    )]
    pub decay_rate: f64,

    #[serde(default = "default_mlp_seed")]
    #[schemars(title = "Seed", description = "Initialisation and shuffling seed")]
    pub seed: Seed,
}

impl MlpParameters {
    pub fn with_hidden_layers(hidden_layers: Vec<usize>) -> Self {
        Self {
            hidden_layers,
            ..Self::default()
        }
    }
}

impl Default for MlpParameters {
    fn default() -> Self {
        Self {
            hidden_layers: default_hidden_layers(),
            epochs: default_epochs(),
            learning_rate: default_learning_rate(),
            decay_rate: default_decay_rate(),
            seed: default_mlp_seed(),
        }
    }
}
