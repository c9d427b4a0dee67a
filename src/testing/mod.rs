pub mod dummies;
pub mod stubs;

pub use stubs::{FailingEstimator, OracleEstimator, ScriptedRandomSource};
