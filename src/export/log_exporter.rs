use crate::evaluation::{CorrelationStat, EvaluationReport, Histogram, Histogram2D};
use crate::export::{ExportError, ReportExporter};
use tracing::{debug, info, warn};

/// Reports summaries through `tracing` instead of writing files.
#[derive(Debug, Default)]
pub struct LogExporter;

impl ReportExporter for LogExporter {
    fn export_histogram(&mut self, h: &Histogram) -> Result<(), ExportError> {
        debug!(
            histogram = %h.name,
            entries = h.entries(),
            underflow = h.underflow(),
            overflow = h.overflow(),
            mean = h.mean(),
            std_dev = h.std_dev(),
            "histogram"
        );
        Ok(())
    }

    fn export_histogram_2d(&mut self, h: &Histogram2D) -> Result<(), ExportError> {
        debug!(
            histogram = %h.name,
            entries = h.entries(),
            underflow = h.underflow(),
            overflow = h.overflow(),
            "histogram_2d"
        );
        Ok(())
    }

    fn export_correlation(&mut self, stat: &CorrelationStat) -> Result<(), ExportError> {
        info!("{stat}");
        Ok(())
    }

    fn finish(&mut self, report: &EvaluationReport) -> Result<(), ExportError> {
        for f in &report.failures {
            warn!(estimator = %f.estimator, reason = %f.reason, "estimator excluded");
        }
        Ok(())
    }
}
