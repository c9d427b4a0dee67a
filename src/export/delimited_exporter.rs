use crate::evaluation::{CorrelationStat, Histogram, Histogram2D};
use crate::export::{ExportError, ReportExporter};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes one delimited text file per histogram into a directory.
///
/// 1-D files hold `bin,lower,upper,count` rows followed by `underflow` and
/// `overflow` rows; 2-D files hold `bin_x,bin_y,count` rows for non-empty
/// cells. Correlations are appended to `correlations.<ext>`.
pub struct DelimitedExporter {
    dir: PathBuf,
    delimiter: char,
    extension: &'static str,
    correlations_started: bool,
}

impl DelimitedExporter {
    pub fn csv<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir, ',', "csv")
    }

    pub fn tsv<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir, '\t', "tsv")
    }

    fn new<P: AsRef<Path>>(dir: P, delimiter: char, extension: &'static str) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            delimiter,
            extension,
            correlations_started: false,
        }
    }

    /// Path of the artifact for `name`.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.{}", self.extension))
    }

    fn create(&self, name: &str) -> Result<File, ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(File::create(self.artifact_path(name))?)
    }
}

impl ReportExporter for DelimitedExporter {
    fn export_histogram(&mut self, h: &Histogram) -> Result<(), ExportError> {
        let mut w = self.create(&h.name)?;
        let d = self.delimiter;
        writeln!(w, "bin{d}lower{d}upper{d}count")?;
        for (i, c) in h.counts().iter().enumerate() {
            let (lo, hi) = h.axis().bin_edges(i);
            writeln!(w, "{i}{d}{lo}{d}{hi}{d}{c}")?;
        }
        writeln!(w, "underflow{d}{d}{}{d}{}", h.lower_bound(), h.underflow())?;
        writeln!(w, "overflow{d}{}{d}{d}{}", h.upper_bound(), h.overflow())?;
        Ok(())
    }

    fn export_histogram_2d(&mut self, h: &Histogram2D) -> Result<(), ExportError> {
        let mut w = self.create(&h.name)?;
        let d = self.delimiter;
        writeln!(w, "bin_x{d}bin_y{d}count")?;
        let bins_x = h.x_axis().bins;
        for (i, c) in h.counts().iter().enumerate() {
            if *c > 0 {
                writeln!(w, "{}{d}{}{d}{c}", i % bins_x, i / bins_x)?;
            }
        }
        writeln!(w, "underflow{d}{d}{}", h.underflow())?;
        writeln!(w, "overflow{d}{d}{}", h.overflow())?;
        Ok(())
    }

    fn export_correlation(&mut self, stat: &CorrelationStat) -> Result<(), ExportError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.artifact_path("correlations");
        let d = self.delimiter;
        let mut w = if self.correlations_started {
            OpenOptions::new().append(true).open(path)?
        } else {
            let mut w = File::create(path)?;
            writeln!(w, "name{d}label{d}value")?;
            self.correlations_started = true;
            w
        };
        writeln!(w, "{}{d}{}{d}{}", stat.name, stat.label, stat.value())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::Correlation;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn histogram_file_is_named_after_histogram() {
        let dir = tempdir().unwrap();
        let mut h = Histogram::new("comp_dmlp", "t", "x", 0.0, 4.0, 2).unwrap();
        for v in [-1.0, 0.5, 3.0, 3.5, 9.0] {
            h.fill(v);
        }
        let mut exp = DelimitedExporter::csv(dir.path());
        exp.export_histogram(&h).unwrap();

        let text = fs::read_to_string(dir.path().join("comp_dmlp.csv")).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "bin,lower,upper,count",
                "0,0,2,1",
                "1,2,4,2",
                "underflow,,0,1",
                "overflow,4,,1",
            ]
        );
    }

    #[test]
    fn correlations_accumulate_in_one_file() {
        let dir = tempdir().unwrap();
        let mut exp = DelimitedExporter::tsv(dir.path().join("nested"));
        let true_corr = CorrelationStat::new("true_corr", "True value", Correlation::Defined(0.5));
        let obs_corr = CorrelationStat::new("obs_corr", "Observed value", Correlation::Degenerate);
        exp.export_correlation(&true_corr).unwrap();
        exp.export_correlation(&obs_corr).unwrap();
        let text = fs::read_to_string(dir.path().join("nested/correlations.tsv")).unwrap();
        assert_eq!(
            text,
            "name\tlabel\tvalue\ntrue_corr\tTrue value\t0.5\nobs_corr\tObserved value\tNaN\n"
        );
    }

    #[test]
    fn two_d_rows_list_non_empty_cells() {
        let dir = tempdir().unwrap();
        let mut h =
            Histogram2D::new("obs_corr", "t", ("a", "b"), (0.0, 2.0, 2), (0.0, 2.0, 2)).unwrap();
        h.fill(1.5, 0.5);
        h.fill(5.0, 0.5);
        let mut exp = DelimitedExporter::csv(dir.path());
        exp.export_histogram_2d(&h).unwrap();
        let text = fs::read_to_string(dir.path().join("obs_corr.csv")).unwrap();
        assert_eq!(text, "bin_x,bin_y,count\n1,0,1\nunderflow,,0\noverflow,,1\n");
    }
}
