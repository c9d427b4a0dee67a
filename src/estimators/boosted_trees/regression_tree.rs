use crate::estimators::boosted_trees::binned_features::BinnedFeatures;

/// Node of a fitted regression tree.
#[derive(Debug, Clone)]
pub(crate) enum TreeNode {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

impl TreeNode {
    pub fn predict(&self, row: &[f64]) -> f64 {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf(v) => return *v,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] < *threshold { left } else { right };
                }
            }
        }
    }
}

struct SplitCandidate {
    feature: usize,
    cut: usize,
    gain: f64,
}

/// Grows a variance-reduction tree on `targets` over the samples in `indices`.
pub(crate) struct TreeGrower<'a> {
    pub binned: &'a BinnedFeatures,
    pub targets: &'a [f64],
    pub max_depth: usize,
    pub min_samples_leaf: usize,
}

impl TreeGrower<'_> {
    pub fn grow(&self, indices: Vec<usize>, depth: usize) -> TreeNode {
        let n = indices.len();
        let sum: f64 = indices.iter().map(|&i| self.targets[i]).sum();
        let mean = if n > 0 { sum / n as f64 } else { 0.0 };

        if depth >= self.max_depth || n < 2 * self.min_samples_leaf.max(1) {
            return TreeNode::Leaf(mean);
        }

        let Some(best) = self.best_split(&indices, sum) else {
            return TreeNode::Leaf(mean);
        };

        let bins = &self.binned.bins[best.feature];
        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| usize::from(bins[i]) <= best.cut);

        TreeNode::Split {
            feature: best.feature,
            threshold: self.binned.thresholds[best.feature][best.cut],
            left: Box::new(self.grow(left, depth + 1)),
            right: Box::new(self.grow(right, depth + 1)),
        }
    }

    fn best_split(&self, indices: &[usize], total_sum: f64) -> Option<SplitCandidate> {
        let n = indices.len();
        let parent_score = total_sum * total_sum / n as f64;
        let min_leaf = self.min_samples_leaf.max(1);
        let mut best: Option<SplitCandidate> = None;

        for (feature, bins) in self.binned.bins.iter().enumerate() {
            let n_bins = self.binned.n_bins(feature);
            if n_bins < 2 {
                continue;
            }
            let mut counts = vec![0usize; n_bins];
            let mut sums = vec![0.0f64; n_bins];
            for &i in indices {
                let b = usize::from(bins[i]);
                counts[b] += 1;
                sums[b] += self.targets[i];
            }

            let mut left_n = 0usize;
            let mut left_sum = 0.0;
            for cut in 0..n_bins - 1 {
                left_n += counts[cut];
                left_sum += sums[cut];
                let right_n = n - left_n;
                if left_n < min_leaf || right_n < min_leaf {
                    continue;
                }
                let right_sum = total_sum - left_sum;
                let gain = left_sum * left_sum / left_n as f64
                    + right_sum * right_sum / right_n as f64
                    - parent_score;
                if gain > 1e-12 && best.as_ref().is_none_or(|b| gain > b.gain) {
                    best = Some(SplitCandidate { feature, cut, gain });
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_function_is_split_once() {
        let rows: Vec<Vec<f64>> = (0..20).map(|i| vec![i as f64]).collect();
        let targets: Vec<f64> = (0..20).map(|i| if i < 10 { -1.0 } else { 1.0 }).collect();
        let binned = BinnedFeatures::new(&rows, 1, 19);
        let grower = TreeGrower {
            binned: &binned,
            targets: &targets,
            max_depth: 3,
            min_samples_leaf: 2,
        };
        let tree = grower.grow((0..20).collect(), 0);
        match &tree {
            TreeNode::Split { threshold, .. } => assert!((9.0..=10.0).contains(threshold)),
            TreeNode::Leaf(_) => panic!("expected a split"),
        }
        assert_eq!(tree.predict(&[3.0]), -1.0);
        assert_eq!(tree.predict(&[15.0]), 1.0);
    }

    #[test]
    fn depth_zero_is_a_mean_leaf() {
        let rows = vec![vec![0.0], vec![1.0]];
        let targets = vec![2.0, 4.0];
        let binned = BinnedFeatures::new(&rows, 1, 4);
        let grower = TreeGrower {
            binned: &binned,
            targets: &targets,
            max_depth: 0,
            min_samples_leaf: 1,
        };
        assert_eq!(grower.grow(vec![0, 1], 0).predict(&[0.5]), 3.0);
    }
}
