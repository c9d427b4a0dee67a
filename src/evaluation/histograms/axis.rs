use crate::core::ConfigurationError;
use serde::Serialize;

/// Fixed binning of `[lower, upper)` into `bins` equal-width bins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub lower: f64,
    pub upper: f64,
    pub bins: usize,
}

/// Where a value lands on an [`Axis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Underflow,
    Bin(usize),
    Overflow,
}

impl Axis {
    /// Rejects `upper <= lower`, non-finite bounds, and zero bins. `name` is
    /// only used in the error.
    pub fn new(
        name: &str,
        lower: f64,
        upper: f64,
        bins: usize,
    ) -> Result<Self, ConfigurationError> {
        if !lower.is_finite() || !upper.is_finite() || upper <= lower {
            return Err(ConfigurationError::InvalidBounds {
                name: name.to_string(),
                lower,
                upper,
            });
        }
        if bins == 0 {
            return Err(ConfigurationError::InvalidBinCount {
                name: name.to_string(),
                bins,
            });
        }
        Ok(Self { lower, upper, bins })
    }

    #[inline]
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.bins as f64
    }

    /// `floor((v - lower) / width)` for values in range. NaN and `+inf`
    /// overflow, `-inf` underflows.
    #[inline]
    pub fn locate(&self, v: f64) -> Placement {
        if v.is_nan() || v >= self.upper {
            return Placement::Overflow;
        }
        if v < self.lower {
            return Placement::Underflow;
        }
        let index = ((v - self.lower) / self.bin_width()).floor() as usize;
        // Rounding can push values just below `upper` onto `bins`.
        Placement::Bin(index.min(self.bins - 1))
    }

    /// `[low, high)` edges of bin `i`.
    pub fn bin_edges(&self, i: usize) -> (f64, f64) {
        let w = self.bin_width();
        (self.lower + w * i as f64, self.lower + w * (i + 1) as f64)
    }

    pub fn bin_center(&self, i: usize) -> f64 {
        let (lo, hi) = self.bin_edges(i);
        0.5 * (lo + hi)
    }
}
