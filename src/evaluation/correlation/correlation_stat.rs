use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Outcome of a Pearson computation.
///
/// Zero variance in either series is reported as `Degenerate`, never coerced
/// to `0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum Correlation {
    Defined(f64),
    Degenerate,
}

impl Correlation {
    /// The coefficient, or NaN when degenerate.
    pub fn value(self) -> f64 {
        match self {
            Correlation::Defined(r) => r,
            Correlation::Degenerate => f64::NAN,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, Correlation::Degenerate)
    }
}

impl From<Correlation> for Option<f64> {
    fn from(c: Correlation) -> Self {
        match c {
            Correlation::Defined(r) => Some(r),
            Correlation::Degenerate => None,
        }
    }
}

/// Named correlation scalar derived from a 2-D histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationStat {
    pub name: String,
    pub label: String,
    pub correlation: Correlation,
}

impl CorrelationStat {
    pub fn new<N: Into<String>, L: Into<String>>(
        name: N,
        label: L,
        correlation: Correlation,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            correlation,
        }
    }

    pub fn value(&self) -> f64 {
        self.correlation.value()
    }
}

impl Display for CorrelationStat {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} correlation: {}", self.label, self.value())
    }
}
