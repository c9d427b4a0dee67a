mod configuration_error;
pub mod dataset;
pub mod random;
pub mod samples;

pub use configuration_error::{ConfigurationError, validate_key};
pub use dataset::{Dataset, DatasetSplit};
pub use samples::{Sample, Variable};
