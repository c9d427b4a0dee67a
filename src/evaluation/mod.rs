mod binning;
pub mod correlation;
mod evaluation_error;
pub mod histograms;
mod measurement;
mod predictions;
mod report;
mod residual_evaluator;

pub use binning::{Binning, Range};
pub use correlation::{Correlation, CorrelationStat, pearson};
pub use evaluation_error::EvaluationError;
pub use histograms::{Histogram, Histogram2D};
pub use measurement::Measurement;
pub use predictions::{Predictions, check_estimator_key};
pub use report::{EstimatorFailure, EvaluationReport};
pub use residual_evaluator::ResidualEvaluator;
