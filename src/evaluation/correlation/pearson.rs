use crate::evaluation::correlation::Correlation;
use serde::Serialize;

/// Running sums for the Pearson coefficient of `(x, y)` pairs.
///
/// `r = (M Σxy − Σx Σy) / sqrt((M Σx² − (Σx)²)(M Σy² − (Σy)²))`
///
/// Sums are accumulated in the order pairs are added, so the result is
/// reproducible only for a fixed insertion order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct PearsonAccumulator {
    m: u64,
    sum_x: f64,
    sum_y: f64,
    sum_xx: f64,
    sum_yy: f64,
    sum_xy: f64,
    #[serde(skip)]
    first: Option<(f64, f64)>,
    #[serde(skip)]
    x_varies: bool,
    #[serde(skip)]
    y_varies: bool,
}

impl PearsonAccumulator {
    /// Pairs with a non-finite coordinate are ignored.
    #[inline]
    pub fn add(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        match self.first {
            None => self.first = Some((x, y)),
            Some((x0, y0)) => {
                self.x_varies |= x != x0;
                self.y_varies |= y != y0;
            }
        }
        self.m += 1;
        self.sum_x += x;
        self.sum_y += y;
        self.sum_xx += x * x;
        self.sum_yy += y * y;
        self.sum_xy += x * y;
    }

    pub fn len(&self) -> u64 {
        self.m
    }

    pub fn is_empty(&self) -> bool {
        self.m == 0
    }

    /// `Degenerate` when either series has zero variance (including the
    /// empty and single-pair cases).
    pub fn coefficient(&self) -> Correlation {
        if !self.x_varies || !self.y_varies {
            return Correlation::Degenerate;
        }
        let m = self.m as f64;
        let numerator = m * self.sum_xy - self.sum_x * self.sum_y;
        let var_x = m * self.sum_xx - self.sum_x * self.sum_x;
        let var_y = m * self.sum_yy - self.sum_y * self.sum_y;
        let denominator = (var_x * var_y).sqrt();
        if var_x <= 0.0 || var_y <= 0.0 || !denominator.is_finite() || denominator == 0.0 {
            return Correlation::Degenerate;
        }
        Correlation::Defined(numerator / denominator)
    }
}

/// Pearson coefficient of two aligned series; extra elements of the longer
/// one are ignored.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    let mut acc = PearsonAccumulator::default();
    for (&x, &y) in xs.iter().zip(ys) {
        acc.add(x, y);
    }
    acc.coefficient()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn series() -> Vec<f64> {
        (0..1000).map(|i| ((i * 37) % 101) as f64 * 0.7 - 12.0).collect()
    }

    #[test]
    fn identical_series_is_one() {
        let x = series();
        let r = pearson(&x, &x).value();
        assert!((r - 1.0).abs() < EPS, "r={r}");
    }

    #[test]
    fn negated_series_is_minus_one() {
        let x = series();
        let y: Vec<f64> = x.iter().map(|v| -v).collect();
        let r = pearson(&x, &y).value();
        assert!((r + 1.0).abs() < EPS, "r={r}");
    }

    #[test]
    fn affine_transform_keeps_sign() {
        let x = series();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 8.0).collect();
        assert!((pearson(&x, &y).value() - 1.0).abs() < EPS);
    }

    #[test]
    fn hand_computed_value() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 1.0, 4.0, 3.0];
        // M Σxy − ΣxΣy = 4*28 − 10*10 = 12; M Σx² − (Σx)² = 4*30 − 100 = 20.
        let r = pearson(&x, &y).value();
        assert!((r - 0.6).abs() < 1e-12, "r={r}");
    }

    #[test]
    fn zero_variance_is_degenerate_not_zero() {
        let x = [0.1; 50];
        let y: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let c = pearson(&x, &y);
        assert_eq!(c, Correlation::Degenerate);
        assert!(c.value().is_nan());
        assert_eq!(pearson(&y, &x), Correlation::Degenerate);
    }

    #[test]
    fn empty_and_single_pair_are_degenerate() {
        assert_eq!(pearson(&[], &[]), Correlation::Degenerate);
        assert_eq!(pearson(&[1.0], &[2.0]), Correlation::Degenerate);
    }

    #[test]
    fn non_finite_pairs_are_skipped() {
        let mut acc = PearsonAccumulator::default();
        acc.add(1.0, 1.0);
        acc.add(f64::NAN, 5.0);
        acc.add(2.0, 2.0);
        acc.add(3.0, f64::INFINITY);
        acc.add(3.0, 3.0);
        assert_eq!(acc.len(), 3);
        assert!((acc.coefficient().value() - 1.0).abs() < EPS);
    }
}
