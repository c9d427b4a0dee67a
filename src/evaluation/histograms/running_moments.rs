use serde::Serialize;

/// Streaming first and second moments: `mean = sum / len`.
///
/// Non-finite values are ignored so that a stray NaN or infinity counted as
/// overflow does not poison the summary statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct RunningMoments {
    len: u64,
    sum: f64,
    sum_sq: f64,
}

impl RunningMoments {
    #[inline]
    pub fn add(&mut self, v: f64) {
        if !v.is_finite() {
            return;
        }
        self.len += 1;
        self.sum += v;
        self.sum_sq += v * v;
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// NaN when nothing has been added.
    pub fn mean(&self) -> f64 {
        if self.len > 0 {
            self.sum / self.len as f64
        } else {
            f64::NAN
        }
    }

    /// Population standard deviation; NaN when nothing has been added.
    pub fn std_dev(&self) -> f64 {
        if self.len == 0 {
            return f64::NAN;
        }
        let n = self.len as f64;
        let mean = self.sum / n;
        (self.sum_sq / n - mean * mean).max(0.0).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        let m = RunningMoments::default();
        assert!(m.is_empty());
        assert!(m.mean().is_nan());
        assert!(m.std_dev().is_nan());
    }

    #[test]
    fn mean_and_std_dev() {
        let mut m = RunningMoments::default();
        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            m.add(v);
        }
        assert_eq!(m.len(), 8);
        assert_eq!(m.mean(), 5.0);
        assert!((m.std_dev() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_values_are_skipped() {
        let mut m = RunningMoments::default();
        m.add(1.0);
        m.add(f64::NAN);
        m.add(f64::INFINITY);
        m.add(3.0);
        assert_eq!(m.len(), 2);
        assert_eq!(m.mean(), 2.0);
    }
}
