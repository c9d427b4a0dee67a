use crate::evaluation::{CorrelationStat, EvaluationReport, Histogram, Histogram2D};
use crate::export::ExportError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Consumer of an [`EvaluationReport`].
///
/// Artifacts are named after the histogram or statistic they render, so an
/// exporter never invents names of its own.
pub trait ReportExporter {
    fn export_histogram(&mut self, histogram: &Histogram) -> Result<(), ExportError>;

    fn export_histogram_2d(&mut self, histogram: &Histogram2D) -> Result<(), ExportError>;

    fn export_correlation(&mut self, stat: &CorrelationStat) -> Result<(), ExportError>;

    /// Called once after every item has been exported.
    fn finish(&mut self, _report: &EvaluationReport) -> Result<(), ExportError> {
        Ok(())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl EvaluationReport {
    /// Hands every histogram, 2-D histogram and correlation to `exporter`, in
    /// report order.
    pub fn export(&self, exporter: &mut dyn ReportExporter) -> Result<(), ExportError> {
        for h in &self.histograms {
            exporter.export_histogram(h)?;
        }
        for h in &self.histograms_2d {
            exporter.export_histogram_2d(h)?;
        }
        for c in &self.correlations {
            exporter.export_correlation(c)?;
        }
        exporter.finish(self)
    }
}
