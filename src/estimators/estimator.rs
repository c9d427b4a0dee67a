use crate::core::{Dataset, Sample, Variable};
use crate::estimators::EstimatorError;

/// Regression estimator the benchmark compares.
///
/// Given a training set plus the columns to use as features and target,
/// produces a [`FittedModel`]. Implementations do not mutate themselves while
/// fitting, so one configured estimator can be fitted repeatedly.
pub trait Estimator {
    fn fit(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError>;
}

/// Predictor produced by [`Estimator::fit`].
pub trait FittedModel {
    /// Predicts the target for one sample.
    fn predict(&self, sample: &Sample) -> f64;
}

/// One prediction per sample, aligned index-for-index with `dataset`.
pub fn predict_all(model: &dyn FittedModel, dataset: &Dataset) -> Vec<f64> {
    dataset.iter().map(|s| model.predict(s)).collect()
}

pub(crate) fn check_training(
    training: &Dataset,
    features: &[Variable],
) -> Result<(), EstimatorError> {
    if features.is_empty() {
        return Err(EstimatorError::NoFeatures);
    }
    if training.is_empty() {
        return Err(EstimatorError::EmptyTrainingSet);
    }
    Ok(())
}

#[inline]
pub(crate) fn feature_row(sample: &Sample, features: &[Variable]) -> Vec<f64> {
    features.iter().map(|&f| sample.value(f)).collect()
}
