use crate::core::ConfigurationError;
use crate::evaluation::histograms::{Axis, Placement, RunningMoments};
use serde::Serialize;

/// Fixed-range, fixed-bin-count frequency counter with underflow and overflow.
///
/// Created empty, filled once over a dataset pass, then only read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub name: String,
    pub title: String,
    pub x_label: String,
    axis: Axis,
    counts: Vec<u64>,
    underflow: u64,
    overflow: u64,
    moments: RunningMoments,
}

impl Histogram {
    pub fn new(
        name: &str,
        title: &str,
        x_label: &str,
        lower: f64,
        upper: f64,
        bins: usize,
    ) -> Result<Self, ConfigurationError> {
        let axis = Axis::new(name, lower, upper, bins)?;
        Ok(Self::with_axis(name, title, x_label, axis))
    }

    pub fn with_axis(name: &str, title: &str, x_label: &str, axis: Axis) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            axis,
            counts: vec![0; axis.bins],
            underflow: 0,
            overflow: 0,
            moments: RunningMoments::default(),
        }
    }

    #[inline]
    pub fn fill(&mut self, v: f64) {
        match self.axis.locate(v) {
            Placement::Underflow => self.underflow += 1,
            Placement::Overflow => self.overflow += 1,
            Placement::Bin(i) => self.counts[i] += 1,
        }
        self.moments.add(v);
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    pub fn lower_bound(&self) -> f64 {
        self.axis.lower
    }

    pub fn upper_bound(&self) -> f64 {
        self.axis.upper
    }

    pub fn bin_count(&self) -> usize {
        self.axis.bins
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn count(&self, bin: usize) -> Option<u64> {
        self.counts.get(bin).copied()
    }

    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    pub fn in_range(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Every fill, in range or not.
    pub fn entries(&self) -> u64 {
        self.in_range() + self.underflow + self.overflow
    }

    /// Mean of every finite value filled, including out-of-range ones.
    pub fn mean(&self) -> f64 {
        self.moments.mean()
    }

    pub fn std_dev(&self) -> f64 {
        self.moments.std_dev()
    }

    /// Share of all entries that fell in bins lying entirely inside
    /// `[lo, hi]`. NaN for an empty histogram.
    pub fn fraction_within(&self, lo: f64, hi: f64) -> f64 {
        let entries = self.entries();
        if entries == 0 {
            return f64::NAN;
        }
        let inside: u64 = self
            .counts
            .iter()
            .enumerate()
            .filter(|(i, _)| {
                let (low, high) = self.axis.bin_edges(*i);
                low >= lo && high <= hi
            })
            .map(|(_, c)| *c)
            .sum();
        inside as f64 / entries as f64
    }
}
