/// Linear map of a training range onto `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Normalizer {
    min: f64,
    max: f64,
}

impl Normalizer {
    pub fn fit<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        Self { min, max }
    }

    #[inline]
    fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Constant ranges map to `0`.
    #[inline]
    pub fn forward(&self, v: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            2.0 * (v - self.min) / span - 1.0
        } else {
            0.0
        }
    }

    #[inline]
    pub fn inverse(&self, v: f64) -> f64 {
        let span = self.span();
        if span > 0.0 {
            (v + 1.0) * span / 2.0 + self.min
        } else {
            self.min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_range_onto_unit_interval() {
        let n = Normalizer::fit([10.0, 20.0, 30.0]);
        assert_eq!(n.forward(10.0), -1.0);
        assert_eq!(n.forward(20.0), 0.0);
        assert_eq!(n.forward(30.0), 1.0);
        assert_eq!(n.inverse(0.5), 25.0);
    }

    #[test]
    fn constant_range_is_flat() {
        let n = Normalizer::fit([4.0, 4.0]);
        assert_eq!(n.forward(100.0), 0.0);
        assert_eq!(n.inverse(0.3), 4.0);
    }
}
