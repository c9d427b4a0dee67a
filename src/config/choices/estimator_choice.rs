use crate::config::choices::{BoostedTreesParameters, MlpParameters, NoParams};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(EstimatorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum EstimatorChoice {
    #[strum_discriminants(strum(
        message = "Naive Sum",
        detailed_message = "Adds the observed features; nothing is learned."
    ))]
    NaiveSum(NoParams),

    #[strum_discriminants(strum(
        message = "Least Squares",
        detailed_message = "Ordinary least squares with intercept."
    ))]
    LeastSquares(NoParams),

    #[strum_discriminants(strum(
        message = "Boosted Decision Trees",
        detailed_message = "Gradient-boosted regression trees on squared loss."
    ))]
    BoostedTrees(BoostedTreesParameters),

    #[strum_discriminants(strum(
        message = "Multilayer Perceptron",
        detailed_message = "tanh network trained by SGD with learning-rate decay."
    ))]
    Mlp(MlpParameters),
}

/// One configured estimator. `key` names its histograms (`residual_<key>`);
/// `name` is for display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EstimatorSpec {
    #[schemars(title = "Key", description = "Histogram name suffix, [a-z0-9_]+")]
    pub key: String,

    #[schemars(title = "Name", description = "Display name")]
    pub name: String,

    #[serde(flatten)]
    pub choice: EstimatorChoice,
}

impl EstimatorSpec {
    pub fn new<K: Into<String>, N: Into<String>>(key: K, name: N, choice: EstimatorChoice) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            choice,
        }
    }

    /// The line-up benchmarked by default: `BDT`, `Shallow_MLP` and `Deep_MLP`.
    pub fn default_lineup() -> Vec<Self> {
        vec![
            Self::new(
                "bdt",
                "BDT",
                EstimatorChoice::BoostedTrees(BoostedTreesParameters::default()),
            ),
            Self::new(
                "smlp",
                "Shallow_MLP",
                EstimatorChoice::Mlp(MlpParameters::with_hidden_layers(vec![1])),
            ),
            Self::new(
                "dmlp",
                "Deep_MLP",
                EstimatorChoice::Mlp(MlpParameters::with_hidden_layers(vec![10])),
            ),
        ]
    }

    pub fn kind(&self) -> EstimatorKind {
        EstimatorKind::from(&self.choice)
    }
}
