use crate::config::choices::EstimatorChoice;
use crate::core::ConfigurationError;
use crate::estimators::{BoostedTrees, Estimator, LeastSquares, Mlp, NaiveSum};

mod boosted_trees;
mod mlp;

pub fn build_estimator(choice: EstimatorChoice) -> Result<Box<dyn Estimator>, ConfigurationError> {
    match choice {
        EstimatorChoice::NaiveSum(_) => Ok(Box::new(NaiveSum)),
        EstimatorChoice::LeastSquares(_) => Ok(Box::new(LeastSquares)),
        EstimatorChoice::BoostedTrees(p) => {
            let e = BoostedTrees::try_from(p)?;
            Ok(Box::new(e))
        }
        EstimatorChoice::Mlp(p) => {
            let e = Mlp::try_from(p)?;
            Ok(Box::new(e))
        }
    }
}
