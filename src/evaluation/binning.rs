use crate::core::ConfigurationError;
use crate::evaluation::histograms::Axis;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const DEFAULT_BINS: usize = 100;

/// `[lower, upper)` interval of a histogram family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Range {
    pub lower: f64,
    pub upper: f64,
}

impl Range {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

fn default_bins() -> usize {
    DEFAULT_BINS
}
fn default_true_range() -> Range {
    Range::new(-150.0, 150.0)
}
fn default_observed_range() -> Range {
    Range::new(-120.0, 120.0)
}
fn default_prediction_range() -> Range {
    Range::new(-150.0, 150.0)
}
fn default_residual_range() -> Range {
    Range::new(-100.0, 100.0)
}
fn default_correlation_range() -> Range {
    Range::new(-150.0, 150.0)
}

/// Ranges and bin counts of every histogram family the evaluator builds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Binning {
    #[serde(default = "default_bins")]
    #[schemars(
        title = "Bins",
        description = "Bin count of every 1-D histogram",
        range(min = 1)
    )]
    pub bins: usize,

    #[serde(default = "default_true_range")]
    #[schemars(title = "True Range", description = "Range of a_true, b_true, z_true")]
    pub true_values: Range,

    #[serde(default = "default_observed_range")]
    #[schemars(title = "Observed Range", description = "Range of a_obs, b_obs, z_obs")]
    pub observed_values: Range,

    #[serde(default = "default_prediction_range")]
    #[schemars(title = "Prediction Range", description = "Range of each estimator's z")]
    pub predictions: Range,

    #[serde(default = "default_residual_range")]
    #[schemars(
        title = "Residual Range",
        description = "Range of residuals against truth and against z_obs"
    )]
    pub residuals: Range,

    #[serde(default = "default_correlation_range")]
    #[schemars(
        title = "Correlation Range",
        description = "Range of both axes of the 2-D histograms"
    )]
    pub correlation: Range,

    #[serde(default = "default_bins")]
    #[schemars(
        title = "Correlation Bins",
        description = "Bin count per axis of the 2-D histograms",
        range(min = 1)
    )]
    pub correlation_bins: usize,
}

impl Default for Binning {
    fn default() -> Self {
        Self {
            bins: DEFAULT_BINS,
            true_values: default_true_range(),
            observed_values: default_observed_range(),
            predictions: default_prediction_range(),
            residuals: default_residual_range(),
            correlation: default_correlation_range(),
            correlation_bins: DEFAULT_BINS,
        }
    }
}

impl Binning {
    /// Checks every family so that errors surface before any histogram is
    /// created.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let families = [
            ("true", self.true_values, self.bins),
            ("obs", self.observed_values, self.bins),
            ("pred", self.predictions, self.bins),
            ("residual", self.residuals, self.bins),
            ("corr", self.correlation, self.correlation_bins),
        ];
        for (name, range, bins) in families {
            Axis::new(name, range.lower, range.upper, bins)?;
        }
        Ok(())
    }
}
