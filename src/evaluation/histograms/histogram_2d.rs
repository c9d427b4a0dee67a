use crate::core::ConfigurationError;
use crate::evaluation::correlation::{Correlation, PearsonAccumulator};
use crate::evaluation::histograms::{Axis, Placement};
use serde::Serialize;

/// Joint histogram of `(x, y)` pairs with a Pearson accumulator.
///
/// Counts are row-major by `y`: bin `(ix, iy)` lives at `iy * bins_x + ix`.
/// A pair outside the grid counts once: as overflow if either coordinate is
/// NaN or at/above its upper bound, otherwise as underflow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram2D {
    pub name: String,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    x: Axis,
    y: Axis,
    counts: Vec<u64>,
    underflow: u64,
    overflow: u64,
    pearson: PearsonAccumulator,
}

impl Histogram2D {
    pub fn new(
        name: &str,
        title: &str,
        (x_label, y_label): (&str, &str),
        x: (f64, f64, usize),
        y: (f64, f64, usize),
    ) -> Result<Self, ConfigurationError> {
        let x = Axis::new(name, x.0, x.1, x.2)?;
        let y = Axis::new(name, y.0, y.1, y.2)?;
        Ok(Self::with_axes(name, title, (x_label, y_label), x, y))
    }

    pub fn with_axes(
        name: &str,
        title: &str,
        (x_label, y_label): (&str, &str),
        x: Axis,
        y: Axis,
    ) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x,
            y,
            counts: vec![0; x.bins * y.bins],
            underflow: 0,
            overflow: 0,
            pearson: PearsonAccumulator::default(),
        }
    }

    #[inline]
    pub fn fill(&mut self, x: f64, y: f64) {
        match (self.x.locate(x), self.y.locate(y)) {
            (Placement::Bin(ix), Placement::Bin(iy)) => {
                self.counts[iy * self.x.bins + ix] += 1;
            }
            (Placement::Overflow, _) | (_, Placement::Overflow) => self.overflow += 1,
            _ => self.underflow += 1,
        }
        self.pearson.add(x, y);
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    pub fn count(&self, ix: usize, iy: usize) -> Option<u64> {
        if ix >= self.x.bins || iy >= self.y.bins {
            return None;
        }
        self.counts.get(iy * self.x.bins + ix).copied()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn underflow(&self) -> u64 {
        self.underflow
    }

    pub fn overflow(&self) -> u64 {
        self.overflow
    }

    pub fn entries(&self) -> u64 {
        self.counts.iter().sum::<u64>() + self.underflow + self.overflow
    }

    /// Pearson coefficient over every finite pair filled.
    pub fn correlation(&self) -> Correlation {
        self.pearson.coefficient()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Histogram2D {
        Histogram2D::new(
            "true_corr",
            "True b vs True a",
            ("a", "b"),
            (-150.0, 150.0, 100),
            (-150.0, 150.0, 100),
        )
        .unwrap()
    }

    #[test]
    fn fills_row_major_cells() {
        let mut h = grid();
        h.fill(-150.0, -147.0);
        h.fill(0.0, 0.0);
        assert_eq!(h.count(0, 1), Some(1));
        assert_eq!(h.count(50, 50), Some(1));
        assert_eq!(h.counts()[100], 1);
        assert_eq!(h.count(100, 0), None);
    }

    #[test]
    fn out_of_range_pairs_are_conserved() {
        let mut h = grid();
        h.fill(-200.0, 0.0);
        h.fill(-200.0, 200.0);
        h.fill(0.0, f64::NAN);
        h.fill(10.0, 10.0);
        assert_eq!(h.underflow(), 1);
        assert_eq!(h.overflow(), 2);
        assert_eq!(h.entries(), 4);
    }

    #[test]
    fn anti_correlated_pairs() {
        let mut h = grid();
        for i in 0..100 {
            let a = i as f64;
            h.fill(a, 50.0 - a);
        }
        assert!((h.correlation().value() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_pairs_enter_the_correlation() {
        let mut h = grid();
        h.fill(0.0, 0.0);
        h.fill(10.0, 10.0);
        h.fill(500.0, -500.0);
        assert_eq!(h.overflow(), 1);
        assert!(h.correlation().value() < 0.0);
    }

    #[test]
    fn constant_x_is_degenerate() {
        let mut h = grid();
        for i in 0..10 {
            h.fill(5.0, i as f64);
        }
        assert!(h.correlation().is_degenerate());
        assert!(h.correlation().value().is_nan());
    }

    #[test]
    fn invalid_axes_are_rejected() {
        assert!(
            Histogram2D::new("c", "c", ("a", "b"), (0.0, 1.0, 0), (0.0, 1.0, 10)).is_err()
        );
        assert!(
            Histogram2D::new("c", "c", ("a", "b"), (0.0, 1.0, 10), (2.0, 1.0, 10)).is_err()
        );
    }
}
