use crate::core::ConfigurationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("predictions for `{estimator}` have {actual} values, test set has {expected} samples")]
    ShapeMismatch {
        estimator: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
