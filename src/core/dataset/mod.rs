mod dataset;
mod exchange;
mod split;

pub use dataset::Dataset;
pub use exchange::{EXCHANGE_COLUMNS, ExchangeError};
pub use split::DatasetSplit;
