use crate::core::{Dataset, Sample, Variable};
use crate::estimators::boosted_trees::binned_features::{BinnedFeatures, MAX_CUTS};
use crate::estimators::boosted_trees::regression_tree::{TreeGrower, TreeNode};
use crate::estimators::estimator::{check_training, feature_row};
use crate::estimators::{Estimator, EstimatorError, FittedModel};
use tracing::debug;

/// Gradient-boosted regression trees on squared loss.
///
/// Each round fits a depth-limited tree to the current residuals, choosing
/// splits among `n_cuts` evenly spaced thresholds per feature, and adds it
/// with weight `shrinkage`.
#[derive(Debug, Clone)]
pub struct BoostedTrees {
    pub n_trees: usize,
    pub max_depth: usize,
    pub min_samples_leaf: usize,
    pub n_cuts: usize,
    pub shrinkage: f64,
}

impl Default for BoostedTrees {
    fn default() -> Self {
        Self {
            n_trees: 500,
            max_depth: 4,
            min_samples_leaf: 150,
            n_cuts: 100,
            shrinkage: 0.4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BoostedTreesModel {
    features: Vec<Variable>,
    base: f64,
    shrinkage: f64,
    trees: Vec<TreeNode>,
}

impl BoostedTreesModel {
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Estimator for BoostedTrees {
    fn fit(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError> {
        Ok(Box::new(self.fit_model(training, features, target)?))
    }
}

impl BoostedTrees {
    pub fn fit_model(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<BoostedTreesModel, EstimatorError> {
        check_training(training, features)?;
        if self.n_cuts > MAX_CUTS {
            return Err(EstimatorError::InvalidParameter(format!(
                "n_cuts must be at most {MAX_CUTS}"
            )));
        }

        let rows: Vec<Vec<f64>> = training.iter().map(|s| feature_row(s, features)).collect();
        let y = training.column(target);
        let n = y.len();
        let base = y.iter().sum::<f64>() / n as f64;

        let binned = BinnedFeatures::new(&rows, features.len(), self.n_cuts);
        let mut current = vec![base; n];
        let mut residuals = vec![0.0; n];
        let mut trees = Vec::with_capacity(self.n_trees);

        for round in 0..self.n_trees {
            for ((r, yi), fi) in residuals.iter_mut().zip(&y).zip(&current) {
                *r = yi - fi;
            }
            let grower = TreeGrower {
                binned: &binned,
                targets: &residuals,
                max_depth: self.max_depth,
                min_samples_leaf: self.min_samples_leaf,
            };
            let tree = grower.grow((0..n).collect(), 0);
            for (fi, row) in current.iter_mut().zip(&rows) {
                *fi += self.shrinkage * tree.predict(row);
            }
            trees.push(tree);

            if round % 100 == 0 {
                let mse = y
                    .iter()
                    .zip(&current)
                    .map(|(a, b)| (a - b) * (a - b))
                    .sum::<f64>()
                    / n as f64;
                debug!(round, mse, "boosting");
            }
        }

        Ok(BoostedTreesModel {
            features: features.to_vec(),
            base,
            shrinkage: self.shrinkage,
            trees,
        })
    }
}

impl FittedModel for BoostedTreesModel {
    fn predict(&self, sample: &Sample) -> f64 {
        let row = feature_row(sample, &self.features);
        self.trees
            .iter()
            .fold(self.base, |acc, t| acc + self.shrinkage * t.predict(&row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Seed;
    use crate::estimators::predict_all;
    use crate::streams::{GenerationMode, generate};

    fn mse(pred: &[f64], truth: &[f64]) -> f64 {
        pred.iter()
            .zip(truth)
            .map(|(p, t)| (p - t) * (p - t))
            .sum::<f64>()
            / pred.len() as f64
    }

    #[test]
    fn learns_noise_free_sum() {
        let train = generate(2000, Seed::Fixed(10), 0.0, GenerationMode::Correlated).unwrap();
        let test = generate(500, Seed::Fixed(11), 0.0, GenerationMode::Correlated).unwrap();
        let bdt = BoostedTrees {
            n_trees: 100,
            max_depth: 4,
            min_samples_leaf: 20,
            n_cuts: 50,
            shrinkage: 0.3,
        };
        let model = bdt
            .fit(&train, &Variable::OBSERVED_FEATURES, Variable::ZTrue)
            .unwrap();
        let truth = test.column(Variable::ZTrue);
        let pred = predict_all(model.as_ref(), &test);
        let err = mse(&pred, &truth);
        // Var(z) for z ~ U[0,100) is ~833.
        assert!(err < 40.0, "mse={err}");
    }

    #[test]
    fn constant_target_predicts_constant() {
        let train: Dataset = (0..200)
            .map(|i| Sample::new(0.0, 0.0, 7.5, i as f64, (i % 7) as f64))
            .collect();
        let model = BoostedTrees {
            n_trees: 10,
            ..BoostedTrees::default()
        }
        .fit_model(&train, &Variable::OBSERVED_FEATURES, Variable::ZTrue)
        .unwrap();
        assert_eq!(model.n_trees(), 10);
        for s in &train {
            assert!((model.predict(s) - 7.5).abs() < 1e-12);
        }
    }

    #[test]
    fn too_many_cuts_is_rejected() {
        let train = generate(20, Seed::Fixed(1), 0.0, GenerationMode::Correlated).unwrap();
        let bdt = BoostedTrees {
            n_cuts: 70_000,
            ..BoostedTrees::default()
        };
        assert!(matches!(
            bdt.fit_model(&train, &Variable::OBSERVED_FEATURES, Variable::ZTrue),
            Err(EstimatorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn zero_trees_predicts_training_mean() {
        let train: Dataset = [1.0, 2.0, 6.0]
            .iter()
            .map(|&z| Sample::new(0.0, 0.0, z, z, 0.0))
            .collect();
        let model = BoostedTrees {
            n_trees: 0,
            ..BoostedTrees::default()
        }
        .fit_model(&train, &[Variable::AObs], Variable::ZTrue)
        .unwrap();
        assert_eq!(model.predict(&Sample::new(0.0, 0.0, 0.0, 100.0, 0.0)), 3.0);
    }
}
