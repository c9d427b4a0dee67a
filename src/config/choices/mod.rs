mod catalogue;
mod estimator_choice;
mod estimator_parameters;

pub use catalogue::write_catalogue;
pub use estimator_choice::{EstimatorChoice, EstimatorKind, EstimatorSpec};
pub use estimator_parameters::{BoostedTreesParameters, MlpParameters, NoParams};
