use crate::config::choices::EstimatorSpec;
use crate::core::random::Seed;
use crate::core::ConfigurationError;
use crate::evaluation::{Binning, check_estimator_key};
use crate::streams::GenerationMode;
use crate::tasks::BenchmarkError;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn default_n_samples() -> i64 {
    10_000
}
fn default_noise_stddev() -> f64 {
    10.0
}
fn default_seed() -> Seed {
    Seed::Fixed(0)
}
fn default_train_fraction() -> f64 {
    0.5
}
fn default_estimators() -> Vec<EstimatorSpec> {
    EstimatorSpec::default_lineup()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatasetParameters {
    #[serde(default = "default_n_samples")]
    #[schemars(
        title = "Samples",
        description = "Number of samples to generate",
        range(min = 0),
        default = "default_n_samples"
    )]
    pub n_samples: i64,

    #[serde(default = "default_noise_stddev")]
    #[schemars(
        title = "Noise",
        description = "Standard deviation of the Gaussian smearing",
        range(min = 0.0),
        default = "default_noise_stddev"
    )]
    pub noise_stddev: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Generation seed")]
    pub seed: Seed,

    #[serde(default)]
    #[schemars(title = "Generation mode", description = "How a_true and b_true are drawn")]
    pub generation_mode: GenerationMode,
}

impl Default for DatasetParameters {
    fn default() -> Self {
        Self {
            n_samples: default_n_samples(),
            noise_stddev: default_noise_stddev(),
            seed: default_seed(),
            generation_mode: GenerationMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SplitParameters {
    #[serde(default = "default_train_fraction")]
    #[schemars(
        title = "Train fraction",
        description = "Share of samples used for training (0–1)",
        range(min = 0.0, max = 1.0),
        default = "default_train_fraction"
    )]
    pub train_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "Shuffle seed of the train/test split")]
    pub seed: Seed,
}

impl Default for SplitParameters {
    fn default() -> Self {
        Self {
            train_fraction: default_train_fraction(),
            seed: default_seed(),
        }
    }
}

/// Everything one benchmark run needs. Every field has a default, so `{}` is
/// a valid configuration describing the reference run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkConfig {
    #[serde(default)]
    pub dataset: DatasetParameters,

    #[serde(default)]
    pub split: SplitParameters,

    #[serde(default)]
    pub binning: Binning,

    #[serde(default = "default_estimators")]
    #[schemars(title = "Estimators", description = "Estimators to fit and compare")]
    pub estimators: Vec<EstimatorSpec>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetParameters::default(),
            split: SplitParameters::default(),
            binning: Binning::default(),
            estimators: default_estimators(),
        }
    }
}

impl BenchmarkConfig {
    /// Reads and validates a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BenchmarkError> {
        let reader = BufReader::new(File::open(path)?);
        let config: Self = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn schema() -> Schema {
        schema_for!(BenchmarkConfig)
    }

    /// Checks everything that can be checked without generating data.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.dataset.n_samples < 0 {
            return Err(ConfigurationError::InvalidSampleCount(self.dataset.n_samples));
        }
        let sigma = self.dataset.noise_stddev;
        if !sigma.is_finite() || sigma < 0.0 {
            return Err(ConfigurationError::InvalidNoise(sigma));
        }
        let f = self.split.train_fraction;
        if !(0.0..=1.0).contains(&f) {
            return Err(ConfigurationError::InvalidTrainFraction(f));
        }
        self.binning.validate()?;

        let mut seen = HashSet::new();
        for spec in &self.estimators {
            check_estimator_key(&spec.key)?;
            if !seen.insert(spec.key.as_str()) {
                return Err(ConfigurationError::DuplicateEstimatorKey(spec.key.clone()));
            }
        }
        Ok(())
    }
}
