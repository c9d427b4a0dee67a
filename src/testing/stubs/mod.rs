pub mod failing_estimator;
pub mod oracle_estimator;
pub mod scripted_random_source;

pub use failing_estimator::FailingEstimator;
pub use oracle_estimator::OracleEstimator;
pub use scripted_random_source::ScriptedRandomSource;
