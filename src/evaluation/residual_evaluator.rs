use crate::core::{ConfigurationError, Dataset};
use crate::evaluation::binning::{Binning, Range};
use crate::evaluation::correlation::CorrelationStat;
use crate::evaluation::histograms::{Axis, Histogram, Histogram2D};
use crate::evaluation::report::{EstimatorFailure, EvaluationReport};
use crate::evaluation::{EvaluationError, Predictions};
use tracing::{debug, warn};

/// Builds the residual, comparison and correlation histograms for a test set
/// and the predictions of the estimators under comparison.
///
/// Samples are processed in dataset order so that the floating-point sums
/// behind means and correlations are reproducible.
#[derive(Debug, Clone)]
pub struct ResidualEvaluator {
    binning: Binning,
}

/// Histograms of one estimator, in fill order.
struct EstimatorHistograms<'a> {
    predictions: &'a [f64],
    z_pred: Histogram,
    residual: Histogram,
    comp: Histogram,
}

impl ResidualEvaluator {
    pub fn new(binning: Binning) -> Result<Self, ConfigurationError> {
        binning.validate()?;
        Ok(Self { binning })
    }

    pub fn binning(&self) -> &Binning {
        &self.binning
    }

    /// All-or-nothing: any estimator whose prediction count differs from the
    /// test set aborts the pass with [`EvaluationError::ShapeMismatch`] before
    /// a single histogram is filled.
    pub fn evaluate(
        &self,
        test: &Dataset,
        predictions: &Predictions,
    ) -> Result<EvaluationReport, EvaluationError> {
        for (key, values) in predictions.iter() {
            check_shape(key, values, test)?;
        }
        Ok(self.fill(test, predictions.iter().collect(), Vec::new()))
    }

    /// Evaluates every estimator whose predictions line up with the test set;
    /// the others are recorded in [`EvaluationReport::failures`] and skipped.
    pub fn evaluate_partial(&self, test: &Dataset, predictions: &Predictions) -> EvaluationReport {
        let mut accepted = Vec::with_capacity(predictions.len());
        let mut failures = Vec::new();
        for (key, values) in predictions.iter() {
            match check_shape(key, values, test) {
                Ok(()) => accepted.push((key, values)),
                Err(err) => {
                    warn!(estimator = key, error = %err, "skipping estimator");
                    failures.push(EstimatorFailure {
                        estimator: key.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }
        self.fill(test, accepted, failures)
    }

    fn hist(&self, name: &str, title: &str, x_label: &str, range: Range) -> Histogram {
        let axis = Axis {
            lower: range.lower,
            upper: range.upper,
            bins: self.binning.bins,
        };
        Histogram::with_axis(name, title, x_label, axis)
    }

    fn hist_2d(&self, name: &str, title: &str, labels: (&str, &str)) -> Histogram2D {
        let axis = Axis {
            lower: self.binning.correlation.lower,
            upper: self.binning.correlation.upper,
            bins: self.binning.correlation_bins,
        };
        Histogram2D::with_axes(name, title, labels, axis, axis)
    }

    fn fill(
        &self,
        test: &Dataset,
        accepted: Vec<(&str, &[f64])>,
        failures: Vec<EstimatorFailure>,
    ) -> EvaluationReport {
        let b = &self.binning;

        let mut true_a = self.hist("true_a", "True a", "Value of a", b.true_values);
        let mut true_b = self.hist("true_b", "True b", "Value of b", b.true_values);
        let mut true_z = self.hist("true_z", "True z", "Value of z", b.true_values);

        let mut obs_a = self.hist("obs_a", "Observed a", "Value of a", b.observed_values);
        let mut obs_b = self.hist("obs_b", "Observed b", "Value of b", b.observed_values);
        let mut obs_z = self.hist("obs_z", "Observed z", "Value of z", b.observed_values);

        let mut residual_a = self.hist("residual_a", "Residual a", "a_obs - a_true", b.residuals);
        let mut residual_b = self.hist("residual_b", "Residual b", "b_obs - b_true", b.residuals);
        let mut residual_z = self.hist("residual_z", "Residual z", "z_obs - z_true", b.residuals);

        let mut estimators: Vec<EstimatorHistograms> = accepted
            .into_iter()
            .map(|(key, values)| EstimatorHistograms {
                predictions: values,
                z_pred: self.hist(
                    &format!("pred_{key}"),
                    &format!("{key} z"),
                    "Value of z",
                    b.predictions,
                ),
                residual: self.hist(
                    &format!("residual_{key}"),
                    &format!("Residual z_{key}"),
                    &format!("z_{key} - z_true"),
                    b.residuals,
                ),
                comp: self.hist(
                    &format!("comp_{key}"),
                    &format!("Residual of z_{key} with respect to z_obs"),
                    &format!("z_{key} - z_obs"),
                    b.residuals,
                ),
            })
            .collect();

        let mut true_corr = self.hist_2d(
            "true_corr",
            "True b vs True a",
            ("Value of a", "Value of b"),
        );
        let mut obs_corr = self.hist_2d(
            "obs_corr",
            "Observed b vs Observed a",
            ("Value of a", "Value of b"),
        );

        for (i, s) in test.iter().enumerate() {
            let z_obs = s.z_obs();

            true_a.fill(s.a_true);
            true_b.fill(s.b_true);
            true_z.fill(s.z_true);

            obs_a.fill(s.a_obs);
            obs_b.fill(s.b_obs);
            obs_z.fill(z_obs);

            residual_a.fill(s.a_obs - s.a_true);
            residual_b.fill(s.b_obs - s.b_true);
            residual_z.fill(z_obs - s.z_true);

            for e in &mut estimators {
                let z_pred = e.predictions[i];
                e.z_pred.fill(z_pred);
                e.residual.fill(z_pred - s.z_true);
                e.comp.fill(z_pred - z_obs);
            }

            true_corr.fill(s.a_true, s.b_true);
            obs_corr.fill(s.a_obs, s.b_obs);
        }

        let correlations = vec![
            CorrelationStat::new("true_corr", "True value", true_corr.correlation()),
            CorrelationStat::new("obs_corr", "Observed value", obs_corr.correlation()),
        ];

        let mut histograms = vec![true_a, true_b, true_z, obs_a, obs_b, obs_z];
        histograms.extend(estimators.iter().map(|e| e.z_pred.clone()));
        histograms.extend([residual_a, residual_b, residual_z]);
        histograms.extend(estimators.iter().map(|e| e.residual.clone()));
        histograms.extend(estimators.into_iter().map(|e| e.comp));

        debug!(
            n_samples = test.len(),
            histograms = histograms.len(),
            failures = failures.len(),
            "evaluation pass complete"
        );

        EvaluationReport {
            n_samples: test.len(),
            histograms,
            histograms_2d: vec![true_corr, obs_corr],
            correlations,
            failures,
        }
    }
}

fn check_shape(key: &str, values: &[f64], test: &Dataset) -> Result<(), EvaluationError> {
    if values.len() == test.len() {
        Ok(())
    } else {
        Err(EvaluationError::ShapeMismatch {
            estimator: key.to_string(),
            expected: test.len(),
            actual: values.len(),
        })
    }
}
