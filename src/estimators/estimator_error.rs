use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("training set is empty")]
    EmptyTrainingSet,

    #[error("no features selected")]
    NoFeatures,

    #[error("normal equations are singular")]
    Singular,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("training diverged: {0}")]
    Diverged(String),
}
