use crate::core::random::Seed;
use crate::core::{Dataset, Sample, Variable};
use crate::estimators::estimator::{check_training, feature_row};
use crate::estimators::mlp::layer::{Activation, Layer};
use crate::estimators::mlp::normalizer::Normalizer;
use crate::estimators::{Estimator, EstimatorError, FittedModel};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Multilayer perceptron regressor with `tanh` hidden layers and a linear
/// output neuron.
///
/// Inputs and target are mapped onto `[-1, 1]` using their training ranges.
/// Training is per-sample SGD on squared error; the learning rate for epoch
/// `e` is `learning_rate / (1 + decay_rate * e)`.
#[derive(Debug, Clone)]
pub struct Mlp {
    pub hidden_layers: Vec<usize>,
    pub epochs: usize,
    pub learning_rate: f64,
    pub decay_rate: f64,
    pub seed: Seed,
}

impl Default for Mlp {
    fn default() -> Self {
        Self {
            hidden_layers: vec![8],
            epochs: 200,
            learning_rate: 0.02,
            decay_rate: 0.001,
            seed: Seed::Fixed(0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MlpModel {
    features: Vec<Variable>,
    inputs: Vec<Normalizer>,
    target: Normalizer,
    layers: Vec<Layer>,
}

impl MlpModel {
    fn forward_normalized(&self, x: Vec<f64>, trace: &mut Vec<Vec<f64>>) {
        trace.clear();
        trace.push(x);
        for layer in &self.layers {
            let mut out = Vec::with_capacity(layer.outputs);
            if let Some(input) = trace.last() {
                layer.forward(input, &mut out);
            }
            trace.push(out);
        }
    }

    fn normalized_row(&self, sample: &Sample) -> Vec<f64> {
        feature_row(sample, &self.features)
            .into_iter()
            .zip(&self.inputs)
            .map(|(v, n)| n.forward(v))
            .collect()
    }
}

impl Estimator for Mlp {
    fn fit(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError> {
        Ok(Box::new(self.fit_model(training, features, target)?))
    }
}

impl Mlp {
    pub fn fit_model(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<MlpModel, EstimatorError> {
        check_training(training, features)?;
        if self.hidden_layers.contains(&0) {
            return Err(EstimatorError::InvalidParameter(
                "hidden layer widths must be at least 1".into(),
            ));
        }

        let mut rng = StdRng::seed_from_u64(self.seed.resolve());

        let inputs: Vec<Normalizer> = features
            .iter()
            .map(|&f| Normalizer::fit(training.iter().map(|s| s.value(f))))
            .collect();
        let target_norm = Normalizer::fit(training.iter().map(|s| s.value(target)));

        let mut widths = Vec::with_capacity(self.hidden_layers.len() + 2);
        widths.push(features.len());
        widths.extend_from_slice(&self.hidden_layers);
        widths.push(1);
        let layers = widths
            .windows(2)
            .enumerate()
            .map(|(i, w)| {
                let activation = if i + 2 == widths.len() {
                    Activation::Identity
                } else {
                    Activation::Tanh
                };
                Layer::new(w[0], w[1], activation, &mut rng)
            })
            .collect();

        let mut model = MlpModel {
            features: features.to_vec(),
            inputs,
            target: target_norm,
            layers,
        };

        let rows: Vec<Vec<f64>> = training.iter().map(|s| model.normalized_row(s)).collect();
        let ys: Vec<f64> = training
            .iter()
            .map(|s| target_norm.forward(s.value(target)))
            .collect();

        let mut order: Vec<usize> = (0..rows.len()).collect();
        let mut trace = Vec::with_capacity(model.layers.len() + 1);
        for epoch in 0..self.epochs {
            let lr = self.learning_rate / (1.0 + self.decay_rate * epoch as f64);
            order.shuffle(&mut rng);
            let mut loss = 0.0;

            for &i in &order {
                model.forward_normalized(rows[i].clone(), &mut trace);
                let y_hat = trace.last().and_then(|o| o.first()).copied().unwrap_or(0.0);
                let err = y_hat - ys[i];
                loss += err * err;

                let mut grad = vec![err];
                for (l, layer) in model.layers.iter_mut().enumerate().rev() {
                    grad = layer.backward(&trace[l], &trace[l + 1], &grad, lr);
                }
            }

            let loss = loss / rows.len() as f64;
            if !loss.is_finite() {
                return Err(EstimatorError::Diverged(format!(
                    "loss became {loss} in epoch {epoch}"
                )));
            }
            if epoch % 50 == 0 {
                debug!(epoch, loss, "mlp training");
            }
        }

        Ok(model)
    }
}

impl FittedModel for MlpModel {
    fn predict(&self, sample: &Sample) -> f64 {
        let mut trace = Vec::with_capacity(self.layers.len() + 1);
        self.forward_normalized(self.normalized_row(sample), &mut trace);
        let y = trace.last().and_then(|o| o.first()).copied().unwrap_or(0.0);
        self.target.inverse(y)
    }
}
