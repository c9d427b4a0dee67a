use thiserror::Error;

/// Invalid parameters detected before any generation or histogram mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(i64),

    #[error("invalid noise standard deviation: {0}")]
    InvalidNoise(f64),

    #[error("invalid histogram bounds for `{name}`: [{lower}, {upper})")]
    InvalidBounds {
        name: String,
        lower: f64,
        upper: f64,
    },

    #[error("invalid bin count for `{name}`: {bins}")]
    InvalidBinCount { name: String, bins: usize },

    #[error("invalid train fraction: {0}")]
    InvalidTrainFraction(f64),

    #[error("invalid estimator key `{0}`: expected non-empty [a-z0-9_]")]
    InvalidEstimatorKey(String),

    #[error("duplicate estimator key `{0}`")]
    DuplicateEstimatorKey(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Checks the `[a-z0-9_]+` rule shared by prediction keys and histogram names.
pub fn validate_key(key: &str) -> Result<(), ConfigurationError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
    if ok {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidEstimatorKey(key.to_string()))
    }
}
