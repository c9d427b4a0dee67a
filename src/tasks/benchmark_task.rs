use crate::config::{BenchmarkConfig, DatasetParameters, SplitParameters, build_estimator};
use crate::core::random::Seed;
use crate::core::{ConfigurationError, Dataset, DatasetSplit, Variable};
use crate::estimators::{Estimator, predict_all};
use crate::evaluation::{
    EstimatorFailure, EvaluationReport, Predictions, ResidualEvaluator, check_estimator_key,
};
use crate::export::LogExporter;
use crate::streams::generate;
use crate::tasks::BenchmarkError;
use crate::utils::math::normal_coverage;
use std::f64::consts::SQRT_2;
use std::time::Instant;
use tracing::{info, info_span, warn};

/// Observed share of `z_obs - z_true` within `±half_width`, next to what a
/// normal with the smearing's standard deviation predicts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageCheck {
    pub half_width: f64,
    pub observed: f64,
    pub expected: f64,
}

#[derive(Debug, Clone)]
pub struct BenchmarkOutcome {
    pub n_train: usize,
    pub n_test: usize,
    pub report: EvaluationReport,
    pub coverage: CoverageCheck,
}

struct ConfiguredEstimator {
    key: String,
    name: String,
    estimator: Box<dyn Estimator>,
}

/// Generates a dataset, splits it, fits every configured estimator on the
/// training part and evaluates their predictions on the test part.
pub struct BenchmarkTask {
    dataset: DatasetParameters,
    split: SplitParameters,
    evaluator: ResidualEvaluator,
    estimators: Vec<ConfiguredEstimator>,
}

impl BenchmarkTask {
    /// Validates `config` and builds its estimators. `auto` seeds are drawn
    /// here, so repeated runs of one task see the same data.
    pub fn new(mut config: BenchmarkConfig) -> Result<Self, BenchmarkError> {
        config.validate()?;
        config.dataset.seed = Seed::Fixed(config.dataset.seed.resolve());
        config.split.seed = Seed::Fixed(config.split.seed.resolve());
        let evaluator = ResidualEvaluator::new(config.binning)?;

        let mut task = Self {
            dataset: config.dataset,
            split: config.split,
            evaluator,
            estimators: Vec::with_capacity(config.estimators.len()),
        };
        for spec in config.estimators {
            let estimator = build_estimator(spec.choice)?;
            task.push_estimator(spec.key, spec.name, estimator)?;
        }
        Ok(task)
    }

    /// Adds an estimator built outside the configuration.
    pub fn with_estimator<K: Into<String>, N: Into<String>>(
        mut self,
        key: K,
        name: N,
        estimator: Box<dyn Estimator>,
    ) -> Result<Self, ConfigurationError> {
        self.push_estimator(key.into(), name.into(), estimator)?;
        Ok(self)
    }

    fn push_estimator(
        &mut self,
        key: String,
        name: String,
        estimator: Box<dyn Estimator>,
    ) -> Result<(), ConfigurationError> {
        check_estimator_key(&key)?;
        if self.estimators.iter().any(|e| e.key == key) {
            return Err(ConfigurationError::DuplicateEstimatorKey(key));
        }
        self.estimators.push(ConfiguredEstimator {
            key,
            name,
            estimator,
        });
        Ok(())
    }

    pub fn estimator_keys(&self) -> impl Iterator<Item = &str> {
        self.estimators.iter().map(|e| e.key.as_str())
    }

    pub fn run(&self) -> Result<BenchmarkOutcome, BenchmarkError> {
        let _span = info_span!("benchmark").entered();
        let start = Instant::now();

        let dataset = self.generate_dataset()?;
        let DatasetSplit { training, test } =
            dataset.split(self.split.train_fraction, self.split.seed)?;
        info!(
            seed = %self.dataset.seed,
            n_samples = dataset.len(),
            n_train = training.len(),
            n_test = test.len(),
            "dataset ready"
        );

        info!(estimators = self.estimators.len(), "begin training");
        let (predictions, failures) = self.train_and_test(&training, &test)?;

        info!(n_test = test.len(), "begin evaluation");
        let mut report = self.evaluator.evaluate_partial(&test, &predictions);
        let mut all_failures = failures;
        all_failures.append(&mut report.failures);
        report.failures = all_failures;

        report.export(&mut LogExporter)?;

        let coverage = self.coverage(&report);
        info!(
            half_width = coverage.half_width,
            observed = coverage.observed,
            expected = coverage.expected,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "residual_z coverage"
        );

        Ok(BenchmarkOutcome {
            n_train: training.len(),
            n_test: test.len(),
            report,
            coverage,
        })
    }

    /// The dataset `run` starts from. Deterministic for a fixed seed.
    pub fn generate_dataset(&self) -> Result<Dataset, ConfigurationError> {
        let d = &self.dataset;
        generate(d.n_samples, d.seed, d.noise_stddev, d.generation_mode)
    }

    /// Fits each estimator and predicts the test set. A failed fit excludes
    /// that estimator only.
    fn train_and_test(
        &self,
        training: &Dataset,
        test: &Dataset,
    ) -> Result<(Predictions, Vec<EstimatorFailure>), BenchmarkError> {
        let mut models = Vec::with_capacity(self.estimators.len());
        let mut failures = Vec::new();
        for e in &self.estimators {
            let fit_start = Instant::now();
            match e
                .estimator
                .fit(training, &Variable::OBSERVED_FEATURES, Variable::ZTrue)
            {
                Ok(model) => {
                    info!(
                        estimator = %e.name,
                        elapsed_ms = fit_start.elapsed().as_millis() as u64,
                        "trained"
                    );
                    models.push((e, model));
                }
                Err(err) => {
                    warn!(estimator = %e.name, error = %err, "training failed");
                    failures.push(EstimatorFailure {
                        estimator: e.key.clone(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        info!(n_test = test.len(), "begin testing");
        let mut predictions = Predictions::new();
        for (e, model) in models {
            predictions.insert(e.key.clone(), predict_all(model.as_ref(), test))?;
        }
        Ok((predictions, failures))
    }

    fn coverage(&self, report: &EvaluationReport) -> CoverageCheck {
        let sigma = self.dataset.noise_stddev;
        let half_width = 4.0 * sigma;
        let observed = report
            .histogram("residual_z")
            .map(|h| {
                if h.entries() == 0 {
                    f64::NAN
                } else {
                    h.fraction_within(-half_width, half_width)
                }
            })
            .unwrap_or(f64::NAN);
        CoverageCheck {
            half_width,
            observed,
            expected: normal_coverage(half_width, sigma * SQRT_2),
        }
    }
}
