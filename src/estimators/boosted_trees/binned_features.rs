/// Largest cut count whose bin indices fit in `u16`.
pub const MAX_CUTS: usize = u16::MAX as usize - 1;

/// Training features quantised onto an evenly spaced grid of candidate cuts.
///
/// For each feature, `n_cuts` thresholds are placed strictly inside
/// `[min, max]`. A value's bin is the number of thresholds `<=` it, so splitting
/// at cut `k` sends bins `0..=k` left.
pub(crate) struct BinnedFeatures {
    pub thresholds: Vec<Vec<f64>>,
    /// `bins[feature][sample]`
    pub bins: Vec<Vec<u16>>,
}

impl BinnedFeatures {
    /// `n_cuts` must not exceed [`MAX_CUTS`].
    pub fn new(rows: &[Vec<f64>], n_features: usize, n_cuts: usize) -> Self {
        let mut thresholds = Vec::with_capacity(n_features);
        let mut bins = Vec::with_capacity(n_features);

        for f in 0..n_features {
            let (lo, hi) = rows.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r[f]), hi.max(r[f]))
            });
            let cuts: Vec<f64> = if hi > lo {
                let step = (hi - lo) / (n_cuts + 1) as f64;
                (1..=n_cuts).map(|k| lo + step * k as f64).collect()
            } else {
                Vec::new()
            };
            let column = rows
                .iter()
                .map(|r| cuts.partition_point(|&t| t <= r[f]) as u16)
                .collect();
            thresholds.push(cuts);
            bins.push(column);
        }

        Self { thresholds, bins }
    }

    pub fn n_bins(&self, feature: usize) -> usize {
        self.thresholds[feature].len() + 1
    }
}
