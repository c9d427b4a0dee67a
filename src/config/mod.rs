pub mod build;
mod benchmark_config;
pub mod choices;

pub use benchmark_config::{BenchmarkConfig, DatasetParameters, SplitParameters};
pub use build::build_estimator;
pub use choices::{EstimatorChoice, EstimatorKind, EstimatorSpec};
