use crate::config::choices::BoostedTreesParameters;
use crate::core::ConfigurationError;
use crate::estimators::{BoostedTrees, MAX_CUTS};
use std::convert::TryFrom;

impl TryFrom<BoostedTreesParameters> for BoostedTrees {
    type Error = ConfigurationError;

    fn try_from(parameters: BoostedTreesParameters) -> Result<Self, Self::Error> {
        let counts = [
            ("n_trees", parameters.n_trees),
            ("max_depth", parameters.max_depth),
            ("min_samples_leaf", parameters.min_samples_leaf),
            ("n_cuts", parameters.n_cuts),
        ];
        if let Some((name, _)) = counts.iter().find(|(_, v)| *v == 0) {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} must be at least 1"
            )));
        }
        if parameters.n_cuts > MAX_CUTS {
            return Err(ConfigurationError::InvalidParameter(format!(
                "n_cuts must be at most {MAX_CUTS}"
            )));
        }
        if !(parameters.shrinkage > 0.0 && parameters.shrinkage <= 1.0) {
            return Err(ConfigurationError::InvalidParameter(
                "shrinkage must be in (0, 1]".into(),
            ));
        }

        Ok(BoostedTrees {
            n_trees: parameters.n_trees,
            max_depth: parameters.max_depth,
            min_samples_leaf: parameters.min_samples_leaf,
            n_cuts: parameters.n_cuts,
            shrinkage: parameters.shrinkage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_parameters() {
        let bdt = BoostedTrees::try_from(BoostedTreesParameters {
            n_trees: 7,
            ..BoostedTreesParameters::default()
        })
        .unwrap();
        assert_eq!(bdt.n_trees, 7);
        assert_eq!(bdt.n_cuts, 100);
    }

    #[test]
    fn cut_count_is_bounded_by_bin_width() {
        let with_cuts = |n_cuts| BoostedTreesParameters {
            n_cuts,
            ..BoostedTreesParameters::default()
        };
        assert_eq!(BoostedTrees::try_from(with_cuts(65_534)).unwrap().n_cuts, 65_534);
        assert_eq!(
            BoostedTrees::try_from(with_cuts(70_000)).unwrap_err(),
            ConfigurationError::InvalidParameter("n_cuts must be at most 65534".into())
        );
    }

    #[test]
    fn rejects_zero_counts_and_bad_shrinkage() {
        let err = BoostedTrees::try_from(BoostedTreesParameters {
            max_depth: 0,
            ..BoostedTreesParameters::default()
        })
        .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidParameter("max_depth must be at least 1".into())
        );

        for shrinkage in [0.0, 1.5, f64::NAN] {
            assert!(
                BoostedTrees::try_from(BoostedTreesParameters {
                    shrinkage,
                    ..BoostedTreesParameters::default()
                })
                .is_err()
            );
        }
    }
}
