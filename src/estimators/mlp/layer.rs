use rand::Rng;

/// Fully connected layer; `weights` is row-major `outputs x inputs`.
#[derive(Debug, Clone)]
pub(crate) struct Layer {
    pub inputs: usize,
    pub outputs: usize,
    pub weights: Vec<f64>,
    pub biases: Vec<f64>,
    pub activation: Activation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Activation {
    Tanh,
    Identity,
}

impl Activation {
    #[inline]
    fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Identity => x,
        }
    }

    /// Derivative expressed through the activated output `y`.
    #[inline]
    fn derivative_from_output(self, y: f64) -> f64 {
        match self {
            Activation::Tanh => 1.0 - y * y,
            Activation::Identity => 1.0,
        }
    }
}

impl Layer {
    /// Glorot-uniform initialisation.
    pub fn new<R: Rng>(inputs: usize, outputs: usize, activation: Activation, rng: &mut R) -> Self {
        let limit = (6.0 / (inputs + outputs) as f64).sqrt();
        let weights = (0..inputs * outputs)
            .map(|_| rng.random_range(-limit..limit))
            .collect();
        Self {
            inputs,
            outputs,
            weights,
            biases: vec![0.0; outputs],
            activation,
        }
    }

    pub fn forward(&self, input: &[f64], output: &mut Vec<f64>) {
        output.clear();
        for o in 0..self.outputs {
            let row = &self.weights[o * self.inputs..(o + 1) * self.inputs];
            let z = row
                .iter()
                .zip(input)
                .fold(self.biases[o], |acc, (w, x)| acc + w * x);
            output.push(self.activation.apply(z));
        }
    }

    /// Applies one SGD step given the loss gradient w.r.t. this layer's
    /// activated output, and returns the gradient w.r.t. its input.
    pub fn backward(
        &mut self,
        input: &[f64],
        output: &[f64],
        grad_output: &[f64],
        learning_rate: f64,
    ) -> Vec<f64> {
        let mut grad_input = vec![0.0; self.inputs];
        for o in 0..self.outputs {
            let delta = grad_output[o] * self.activation.derivative_from_output(output[o]);
            let row = &mut self.weights[o * self.inputs..(o + 1) * self.inputs];
            for (i, w) in row.iter_mut().enumerate() {
                grad_input[i] += *w * delta;
                *w -= learning_rate * delta * input[i];
            }
            self.biases[o] -= learning_rate * delta;
        }
        grad_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn forward_applies_weights_and_activation() {
        let layer = Layer {
            inputs: 2,
            outputs: 1,
            weights: vec![0.5, -1.0],
            biases: vec![0.25],
            activation: Activation::Identity,
        };
        let mut out = Vec::new();
        layer.forward(&[2.0, 1.0], &mut out);
        assert_eq!(out, vec![0.25]);
    }

    #[test]
    fn init_respects_glorot_limit() {
        let mut rng = StdRng::seed_from_u64(0);
        let layer = Layer::new(2, 10, Activation::Tanh, &mut rng);
        let limit = (6.0f64 / 12.0).sqrt();
        assert_eq!(layer.weights.len(), 20);
        assert!(layer.weights.iter().all(|w| w.abs() <= limit));
    }

    #[test]
    fn backward_moves_output_towards_target() {
        let mut layer = Layer {
            inputs: 1,
            outputs: 1,
            weights: vec![0.0],
            biases: vec![0.0],
            activation: Activation::Identity,
        };
        let mut out = Vec::new();
        layer.forward(&[1.0], &mut out);
        // d(0.5 (y - 1)^2)/dy at y = 0
        layer.backward(&[1.0], &out, &[-1.0], 0.1);
        layer.forward(&[1.0], &mut out);
        assert!((out[0] - 0.2).abs() < 1e-12);
    }
}
