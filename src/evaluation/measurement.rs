use serde::Serialize;

/// Summarized scalar read off an evaluation report.
///
/// Typical examples: `"residual_bdt.mean"`, `"comp_smlp.std_dev"`, `"true_corr"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    /// Convenience constructor
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
