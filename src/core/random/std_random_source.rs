use crate::core::random::{RandomSource, Seed};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// [`RandomSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandomSource {
    seed: u64,
    rng: StdRng,
}

impl StdRandomSource {
    /// Builds a source for `seed`; `Seed::Auto` is resolved once here so that
    /// [`restart`](Self::restart) can replay the same stream.
    pub fn new(seed: Seed) -> Self {
        let seed = seed.resolve();
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for StdRandomSource {
    #[inline]
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    #[inline]
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let n: f64 = self.rng.sample(StandardNormal);
        mean + stddev * n
    }

    fn restart(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_stays_in_unit_interval() {
        let mut r = StdRandomSource::new(Seed::Fixed(3));
        for _ in 0..10_000 {
            let u = r.uniform();
            assert!((0.0..1.0).contains(&u), "u={u}");
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = StdRandomSource::new(Seed::Fixed(11));
        let mut b = StdRandomSource::new(Seed::Fixed(11));
        for _ in 0..100 {
            assert_eq!(a.uniform().to_bits(), b.uniform().to_bits());
            assert_eq!(a.gaussian(0.0, 10.0).to_bits(), b.gaussian(0.0, 10.0).to_bits());
        }
    }

    #[test]
    fn restart_replays_auto_seed() {
        let mut r = StdRandomSource::new(Seed::Auto);
        let first: Vec<u64> = (0..20).map(|_| r.uniform().to_bits()).collect();
        r.restart();
        let second: Vec<u64> = (0..20).map(|_| r.uniform().to_bits()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gaussian_moments_are_plausible() {
        let mut r = StdRandomSource::new(Seed::Fixed(5));
        let n = 20_000;
        let xs: Vec<f64> = (0..n).map(|_| r.gaussian(3.0, 2.0)).collect();
        let mean = xs.iter().sum::<f64>() / n as f64;
        let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
        assert!((mean - 3.0).abs() < 0.1, "mean={mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.1, "sd={}", var.sqrt());
    }

    #[test]
    fn zero_stddev_returns_mean() {
        let mut r = StdRandomSource::new(Seed::Fixed(1));
        assert_eq!(r.gaussian(4.5, 0.0), 4.5);
    }
}
