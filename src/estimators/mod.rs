mod boosted_trees;
mod estimator;
mod estimator_error;
mod least_squares;
mod mlp;
mod naive_sum;

pub use boosted_trees::{BoostedTrees, BoostedTreesModel, MAX_CUTS};
pub use estimator::{Estimator, FittedModel, predict_all};
pub use estimator_error::EstimatorError;
pub use least_squares::{LeastSquares, LeastSquaresModel};
pub use mlp::{Mlp, MlpModel};
pub use naive_sum::NaiveSum;
