use crate::config::choices::MlpParameters;
use crate::core::ConfigurationError;
use crate::estimators::Mlp;
use std::convert::TryFrom;

impl TryFrom<MlpParameters> for Mlp {
    type Error = ConfigurationError;

    fn try_from(parameters: MlpParameters) -> Result<Self, Self::Error> {
        if parameters.hidden_layers.iter().any(|&w| w == 0) {
            return Err(ConfigurationError::InvalidParameter(
                "hidden layer widths must be at least 1".into(),
            ));
        }
        if parameters.epochs == 0 {
            return Err(ConfigurationError::InvalidParameter(
                "epochs must be at least 1".into(),
            ));
        }
        if !(parameters.learning_rate.is_finite() && parameters.learning_rate > 0.0) {
            return Err(ConfigurationError::InvalidParameter(
                "learning_rate must be positive".into(),
            ));
        }
        if !(parameters.decay_rate.is_finite() && parameters.decay_rate >= 0.0) {
            return Err(ConfigurationError::InvalidParameter(
                "decay_rate must be non-negative".into(),
            ));
        }

        Ok(Mlp {
            hidden_layers: parameters.hidden_layers,
            epochs: parameters.epochs,
            learning_rate: parameters.learning_rate,
            decay_rate: parameters.decay_rate,
            seed: parameters.seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::Seed;

    #[test]
    fn builds_from_defaults() {
        let mlp = Mlp::try_from(MlpParameters::with_hidden_layers(vec![10, 5])).unwrap();
        assert_eq!(mlp.hidden_layers, vec![10, 5]);
        assert_eq!(mlp.seed, Seed::Fixed(0));
    }

    #[test]
    fn rejects_zero_width_layer() {
        assert!(Mlp::try_from(MlpParameters::with_hidden_layers(vec![4, 0])).is_err());
    }

    #[test]
    fn rejects_non_positive_learning_rate() {
        let p = MlpParameters {
            learning_rate: 0.0,
            ..MlpParameters::default()
        };
        assert_eq!(
            Mlp::try_from(p).unwrap_err(),
            ConfigurationError::InvalidParameter("learning_rate must be positive".into())
        );
    }
}
