use crate::core::{Dataset, Variable};
use crate::estimators::{Estimator, EstimatorError, FittedModel};

/// Always fails to fit with the configured error.
#[derive(Debug, Clone)]
pub struct FailingEstimator(pub EstimatorError);

impl Estimator for FailingEstimator {
    fn fit(
        &self,
        _training: &Dataset,
        _features: &[Variable],
        _target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError> {
        Err(self.0.clone())
    }
}
