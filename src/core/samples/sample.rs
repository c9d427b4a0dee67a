use crate::core::samples::Variable;
use serde::{Deserialize, Serialize};

/// One synthetic measurement: latent values and their smeared observations.
///
/// Built once by a generator and never mutated afterwards. `z_obs` is not
/// stored; it is always recomputed as `a_obs + b_obs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub a_true: f64,
    pub b_true: f64,
    pub z_true: f64,
    pub a_obs: f64,
    pub b_obs: f64,
}

impl Sample {
    pub fn new(a_true: f64, b_true: f64, z_true: f64, a_obs: f64, b_obs: f64) -> Self {
        Self {
            a_true,
            b_true,
            z_true,
            a_obs,
            b_obs,
        }
    }

    #[inline]
    pub fn z_obs(&self) -> f64 {
        self.a_obs + self.b_obs
    }

    #[inline]
    pub fn value(&self, variable: Variable) -> f64 {
        match variable {
            Variable::AObs => self.a_obs,
            Variable::BObs => self.b_obs,
            Variable::ZObs => self.z_obs(),
            Variable::ATrue => self.a_true,
            Variable::BTrue => self.b_true,
            Variable::ZTrue => self.z_true,
        }
    }
}
