use crate::core::{Dataset, Sample, Variable};
use crate::estimators::estimator::check_training;
use crate::estimators::{Estimator, EstimatorError, FittedModel};

/// Reference estimator that ignores the training data and predicts the plain
/// sum of the selected features (`a + b` for the observed pair).
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveSum;

struct NaiveSumModel {
    features: Vec<Variable>,
}

impl Estimator for NaiveSum {
    fn fit(
        &self,
        training: &Dataset,
        features: &[Variable],
        _target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError> {
        check_training(training, features)?;
        Ok(Box::new(NaiveSumModel {
            features: features.to_vec(),
        }))
    }
}

impl FittedModel for NaiveSumModel {
    fn predict(&self, sample: &Sample) -> f64 {
        self.features.iter().map(|&f| sample.value(f)).sum()
    }
}
