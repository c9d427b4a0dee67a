use crate::evaluation::{CorrelationStat, EvaluationReport, Histogram, Histogram2D};
use crate::export::{ExportError, ReportExporter};
use chrono::Utc;
use serde_json::{Value, json};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Collects the whole report into a single `report.json`.
pub struct JsonExporter {
    path: PathBuf,
    histograms: Vec<Value>,
    histograms_2d: Vec<Value>,
    correlations: Vec<Value>,
}

impl JsonExporter {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            path: dir.as_ref().join("report.json"),
            histograms: Vec::new(),
            histograms_2d: Vec::new(),
            correlations: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportExporter for JsonExporter {
    fn export_histogram(&mut self, h: &Histogram) -> Result<(), ExportError> {
        self.histograms.push(json!({
            "name": h.name,
            "title": h.title,
            "x_label": h.x_label,
            "lower": h.lower_bound(),
            "upper": h.upper_bound(),
            "counts": h.counts(),
            "underflow": h.underflow(),
            "overflow": h.overflow(),
            "mean": h.mean(),
            "std_dev": h.std_dev(),
        }));
        Ok(())
    }

    fn export_histogram_2d(&mut self, h: &Histogram2D) -> Result<(), ExportError> {
        self.histograms_2d.push(serde_json::to_value(h)?);
        Ok(())
    }

    fn export_correlation(&mut self, stat: &CorrelationStat) -> Result<(), ExportError> {
        self.correlations.push(serde_json::to_value(stat)?);
        Ok(())
    }

    fn finish(&mut self, report: &EvaluationReport) -> Result<(), ExportError> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let doc = json!({
            "generated_at": Utc::now().to_rfc3339(),
            "n_samples": report.n_samples,
            "histograms": std::mem::take(&mut self.histograms),
            "histograms_2d": std::mem::take(&mut self.histograms_2d),
            "correlations": std::mem::take(&mut self.correlations),
            "failures": report.failures,
        });
        let writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer_pretty(writer, &doc)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{Binning, Predictions, ResidualEvaluator};
    use crate::testing::dummies::four_samples;
    use tempfile::tempdir;

    #[test]
    fn writes_single_document() {
        let dir = tempdir().unwrap();
        let report = ResidualEvaluator::new(Binning::default())
            .unwrap()
            .evaluate(&four_samples(), &Predictions::new().with("smlp", vec![0.0; 4]).unwrap())
            .unwrap();
        let mut exp = JsonExporter::new(dir.path());
        report.export(&mut exp).unwrap();

        let text = std::fs::read_to_string(exp.path()).unwrap();
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["n_samples"], 4);
        assert!(doc["generated_at"].as_str().is_some());
        let names: Vec<&str> = doc["histograms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["name"].as_str().unwrap())
            .collect();
        assert!(names.contains(&"residual_smlp"));
        assert!(names.contains(&"comp_smlp"));
        assert_eq!(doc["correlations"].as_array().unwrap().len(), 2);
        assert_eq!(doc["correlations"][0]["name"], "true_corr");
    }
}
