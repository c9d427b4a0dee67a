use crate::core::ConfigurationError;
use crate::core::dataset::Dataset;
use crate::core::random::Seed;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Random partition of a dataset into training and test parts.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSplit {
    pub training: Dataset,
    pub test: Dataset,
}

impl Dataset {
    /// Randomly assigns `round(len * train_fraction)` samples to training and
    /// the rest to test. Both parts keep the original insertion order.
    pub fn split(
        &self,
        train_fraction: f64,
        seed: Seed,
    ) -> Result<DatasetSplit, ConfigurationError> {
        if !(0.0..=1.0).contains(&train_fraction) {
            return Err(ConfigurationError::InvalidTrainFraction(train_fraction));
        }

        let n = self.len();
        let n_train = ((n as f64) * train_fraction).round() as usize;

        let mut indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed.resolve());
        indices.shuffle(&mut rng);

        let mut in_training = vec![false; n];
        for &i in &indices[..n_train.min(n)] {
            in_training[i] = true;
        }

        let mut training = Dataset::with_capacity(n_train);
        let mut test = Dataset::with_capacity(n - n_train.min(n));
        for (sample, train) in self.iter().zip(in_training) {
            if train {
                training.push(*sample);
            } else {
                test.push(*sample);
            }
        }

        Ok(DatasetSplit { training, test })
    }
}
