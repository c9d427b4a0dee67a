use crate::core::ConfigurationError;
use crate::core::dataset::ExchangeError;
use crate::evaluation::EvaluationError;
use crate::export::ExportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Exchange(#[from] ExchangeError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration file: {0}")]
    Json(#[from] serde_json::Error),
}
