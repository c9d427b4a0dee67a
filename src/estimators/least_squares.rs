use crate::core::{Dataset, Sample, Variable};
use crate::estimators::estimator::{check_training, feature_row};
use crate::estimators::{Estimator, EstimatorError, FittedModel};

const PIVOT_EPSILON: f64 = 1e-10;

/// Ordinary least squares with an intercept, solved from the normal
/// equations.
#[derive(Debug, Default, Clone, Copy)]
pub struct LeastSquares;

/// `intercept + Σ coefficients[i] * feature[i]`.
#[derive(Debug, Clone)]
pub struct LeastSquaresModel {
    features: Vec<Variable>,
    pub intercept: f64,
    pub coefficients: Vec<f64>,
}

impl Estimator for LeastSquares {
    fn fit(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<Box<dyn FittedModel>, EstimatorError> {
        Ok(Box::new(self.fit_model(training, features, target)?))
    }
}

impl LeastSquares {
    pub fn fit_model(
        &self,
        training: &Dataset,
        features: &[Variable],
        target: Variable,
    ) -> Result<LeastSquaresModel, EstimatorError> {
        check_training(training, features)?;

        // Design matrix columns: [1, x_0, .., x_{p-1}].
        let dim = features.len() + 1;
        let mut xtx = vec![vec![0.0; dim]; dim];
        let mut xty = vec![0.0; dim];

        for sample in training {
            let mut row = Vec::with_capacity(dim);
            row.push(1.0);
            row.extend(feature_row(sample, features));
            let y = sample.value(target);
            for i in 0..dim {
                xty[i] += row[i] * y;
                for j in 0..dim {
                    xtx[i][j] += row[i] * row[j];
                }
            }
        }

        let beta = solve(xtx, xty)?;
        Ok(LeastSquaresModel {
            features: features.to_vec(),
            intercept: beta[0],
            coefficients: beta[1..].to_vec(),
        })
    }
}

impl FittedModel for LeastSquaresModel {
    fn predict(&self, sample: &Sample) -> f64 {
        self.features
            .iter()
            .zip(&self.coefficients)
            .fold(self.intercept, |acc, (&f, c)| acc + c * sample.value(f))
    }
}

/// Gaussian elimination with partial pivoting.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Result<Vec<f64>, EstimatorError> {
    let n = b.len();
    let scale = a
        .iter()
        .flat_map(|r| r.iter())
        .fold(0.0f64, |m, v| m.max(v.abs()))
        .max(1.0);

    for col in 0..n {
        let pivot = (col..n)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .ok_or(EstimatorError::Singular)?;
        if a[pivot][col].abs() <= PIVOT_EPSILON * scale {
            return Err(EstimatorError::Singular);
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    if x.iter().all(|v| v.is_finite()) {
        Ok(x)
    } else {
        Err(EstimatorError::Singular)
    }
}
