mod correlation_stat;
mod pearson;

pub use correlation_stat::{Correlation, CorrelationStat};
pub use pearson::{PearsonAccumulator, pearson};
