use crate::evaluation::Measurement;
use crate::evaluation::correlation::CorrelationStat;
use crate::evaluation::histograms::{Histogram, Histogram2D};
use serde::Serialize;

/// Estimator excluded from an evaluation pass, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimatorFailure {
    pub estimator: String,
    pub reason: String,
}

/// Everything one evaluation pass produced, addressable by stable name.
///
/// 1-D histograms are named `<role>_<variable>` (`true_a`, `obs_z`,
/// `pred_bdt`, `residual_smlp`, `comp_dmlp`); 2-D histograms and their
/// correlation stats are named `<role>_corr`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub n_samples: usize,
    pub histograms: Vec<Histogram>,
    pub histograms_2d: Vec<Histogram2D>,
    pub correlations: Vec<CorrelationStat>,
    pub failures: Vec<EstimatorFailure>,
}

impl EvaluationReport {
    pub fn histogram(&self, name: &str) -> Option<&Histogram> {
        self.histograms.iter().find(|h| h.name == name)
    }

    pub fn histogram_2d(&self, name: &str) -> Option<&Histogram2D> {
        self.histograms_2d.iter().find(|h| h.name == name)
    }

    pub fn correlation(&self, name: &str) -> Option<&CorrelationStat> {
        self.correlations.iter().find(|c| c.name == name)
    }

    pub fn histogram_names(&self) -> impl Iterator<Item = &str> {
        self.histograms
            .iter()
            .map(|h| h.name.as_str())
            .chain(self.histograms_2d.iter().map(|h| h.name.as_str()))
    }

    /// Mean and standard deviation of every residual/comparison histogram,
    /// followed by each correlation value.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = Vec::new();
        for h in &self.histograms {
            if h.name.starts_with("residual_") || h.name.starts_with("comp_") {
                out.push(Measurement::new(format!("{}.mean", h.name), h.mean()));
                out.push(Measurement::new(format!("{}.std_dev", h.name), h.std_dev()));
            }
        }
        for c in &self.correlations {
            out.push(Measurement::new(c.name.clone(), c.value()));
        }
        out
    }
}
