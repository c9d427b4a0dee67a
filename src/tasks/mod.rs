mod benchmark_error;
mod benchmark_task;

pub use benchmark_error::BenchmarkError;
pub use benchmark_task::{BenchmarkOutcome, BenchmarkTask, CoverageCheck};
