use crate::core::random::{RandomSource, Seed, StdRandomSource};
use crate::core::{ConfigurationError, Dataset, Sample};
use crate::streams::generators::GenerationMode;
use crate::streams::sample_stream::SampleStream;
use tracing::debug;

/// Width of the uniform range latent values are drawn from.
const LATENT_RANGE: f64 = 100.0;

/// Generates samples whose latent parts sum to a latent target, each part
/// observed through independent Gaussian smearing.
///
/// Per sample the random stream is consumed in a fixed order: two uniforms
/// (`z`, `a` when correlated; `a`, `b` when independent) then the Gaussian
/// smearing of `a` and of `b`. Reordering these draws changes every sample
/// produced for a given seed.
#[derive(Debug)]
pub struct SmearedSumGenerator<R: RandomSource = StdRandomSource> {
    source: R,
    mode: GenerationMode,
    noise_stddev: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl SmearedSumGenerator<StdRandomSource> {
    pub fn new(
        mode: GenerationMode,
        noise_stddev: f64,
        max_samples: Option<usize>,
        seed: Seed,
    ) -> Result<Self, ConfigurationError> {
        Self::with_source(StdRandomSource::new(seed), mode, noise_stddev, max_samples)
    }

    /// Seed actually in use; differs from the requested one only for `Seed::Auto`.
    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<R: RandomSource> SmearedSumGenerator<R> {
    pub fn with_source(
        source: R,
        mode: GenerationMode,
        noise_stddev: f64,
        max_samples: Option<usize>,
    ) -> Result<Self, ConfigurationError> {
        if !noise_stddev.is_finite() || noise_stddev < 0.0 {
            return Err(ConfigurationError::InvalidNoise(noise_stddev));
        }
        Ok(Self {
            source,
            mode,
            noise_stddev,
            max_samples,
            produced: 0,
        })
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    #[inline]
    fn draw_latent(&mut self) -> (f64, f64, f64) {
        match self.mode {
            GenerationMode::Correlated => {
                let z = self.source.uniform() * LATENT_RANGE;
                let a = self.source.uniform() * LATENT_RANGE;
                let b = z - a;
                // Stored as the sum of the stored parts; may differ from `z` by an ulp.
                (a, b, a + b)
            }
            GenerationMode::Independent => {
                let half = LATENT_RANGE / 2.0;
                let a = self.source.uniform() * LATENT_RANGE - half;
                let b = self.source.uniform() * LATENT_RANGE - half;
                (a, b, a + b)
            }
        }
    }

    #[inline]
    fn smear(&mut self, value: f64) -> f64 {
        value + self.source.gaussian(0.0, self.noise_stddev)
    }

    fn draw_sample(&mut self) -> Sample {
        let (a_true, b_true, z_true) = self.draw_latent();
        let a_obs = self.smear(a_true);
        let b_obs = self.smear(b_true);
        Sample::new(a_true, b_true, z_true, a_obs, b_obs)
    }
}

impl<R: RandomSource> SampleStream for SmearedSumGenerator<R> {
    fn has_more_samples(&self) -> bool {
        self.max_samples.is_none_or(|max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<Sample> {
        if !self.has_more_samples() {
            return None;
        }
        let sample = self.draw_sample();
        self.produced += 1;
        Some(sample)
    }

    fn restart(&mut self) {
        self.source.restart();
        self.produced = 0;
    }
}

/// Generates `n` samples with a fresh [`StdRandomSource`].
///
/// A negative `n` is a configuration error; `0` yields an empty dataset.
pub fn generate(
    n: i64,
    seed: Seed,
    noise_stddev: f64,
    mode: GenerationMode,
) -> Result<Dataset, ConfigurationError> {
    let n = usize::try_from(n).map_err(|_| ConfigurationError::InvalidSampleCount(n))?;
    let mut generator = SmearedSumGenerator::new(mode, noise_stddev, Some(n), seed)?;
    debug!(n, seed = generator.seed(), noise_stddev, %mode, "generating dataset");

    let mut dataset = Dataset::with_capacity(n);
    while let Some(sample) = generator.next_sample() {
        dataset.push(sample);
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedRandomSource;

    #[test]
    fn produces_exactly_n_samples() {
        for n in [0, 1, 17, 1000] {
            let d = generate(n, Seed::Fixed(1), 10.0, GenerationMode::Correlated).unwrap();
            assert_eq!(d.len(), n as usize);
        }
    }

    #[test]
    fn correlated_mode_keeps_exact_additivity() {
        for seed in [0, 1, 42, 2025] {
            let d = generate(2000, Seed::Fixed(seed), 10.0, GenerationMode::Correlated).unwrap();
            for s in &d {
                assert_eq!(s.a_true + s.b_true, s.z_true, "seed={seed} sample={s:?}");
                assert!((0.0..100.0).contains(&s.a_true));
                assert!((0.0..100.0).contains(&s.z_true));
            }
        }
    }

    #[test]
    fn correlated_sum_survives_rounding() {
        // `a + (z - a)` need not round back to `z`.
        let uniforms = vec![0.26217063257252516, 0.7719869057468208, 0.1, 0.3, 0.7, 0.9999];
        let source = ScriptedRandomSource::new(uniforms, vec![0.0]);
        let mut g = SmearedSumGenerator::with_source(source, GenerationMode::Correlated, 0.0, None)
            .unwrap();
        for _ in 0..3 {
            let s = g.next_sample().unwrap();
            assert_eq!(s.a_true + s.b_true, s.z_true, "{s:?}");
        }
    }

    #[test]
    fn independent_mode_ranges() {
        let d = generate(2000, Seed::Fixed(8), 10.0, GenerationMode::Independent).unwrap();
        for s in &d {
            assert!((-50.0..50.0).contains(&s.a_true));
            assert!((-50.0..50.0).contains(&s.b_true));
            assert_eq!(s.z_true, s.a_true + s.b_true);
        }
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let a = generate(500, Seed::Fixed(77), 10.0, GenerationMode::Correlated).unwrap();
        let b = generate(500, Seed::Fixed(77), 10.0, GenerationMode::Correlated).unwrap();
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.a_obs.to_bits(), y.a_obs.to_bits());
            assert_eq!(x.b_obs.to_bits(), y.b_obs.to_bits());
            assert_eq!(x.z_true.to_bits(), y.z_true.to_bits());
        }
        let c = generate(500, Seed::Fixed(78), 10.0, GenerationMode::Correlated).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn draws_are_consumed_in_fixed_order() {
        let source = ScriptedRandomSource::new(vec![0.25, 0.5], vec![1.0, -2.0]);
        let mut g = SmearedSumGenerator::with_source(source, GenerationMode::Correlated, 10.0, None)
            .unwrap();
        let s = g.next_sample().unwrap();
        assert_eq!(s.z_true, 25.0);
        assert_eq!(s.a_true, 50.0);
        assert_eq!(s.b_true, -25.0);
        assert_eq!(s.a_obs, 60.0);
        assert_eq!(s.b_obs, -45.0);

        let source = ScriptedRandomSource::new(vec![0.25, 0.5], vec![1.0, -2.0]);
        let mut g =
            SmearedSumGenerator::with_source(source, GenerationMode::Independent, 1.0, None)
                .unwrap();
        let s = g.next_sample().unwrap();
        assert_eq!(s.a_true, -25.0);
        assert_eq!(s.b_true, 0.0);
        assert_eq!(s.z_true, -25.0);
        assert_eq!(s.a_obs, -24.0);
        assert_eq!(s.b_obs, -2.0);
    }

    #[test]
    fn zero_noise_observes_truth() {
        let d = generate(100, Seed::Fixed(3), 0.0, GenerationMode::Correlated).unwrap();
        for s in &d {
            assert_eq!(s.a_obs, s.a_true);
            assert_eq!(s.b_obs, s.b_true);
        }
    }

    #[test]
    fn restart_replays_the_stream() {
        let mut g =
            SmearedSumGenerator::new(GenerationMode::Correlated, 10.0, Some(10), Seed::Auto)
                .unwrap();
        let first: Vec<Sample> = std::iter::from_fn(|| g.next_sample()).collect();
        assert_eq!(first.len(), 10);
        assert!(!g.has_more_samples());
        g.restart();
        let second: Vec<Sample> = std::iter::from_fn(|| g.next_sample()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            generate(-1, Seed::Fixed(0), 10.0, GenerationMode::Correlated).unwrap_err(),
            ConfigurationError::InvalidSampleCount(-1)
        );
        assert!(matches!(
            generate(10, Seed::Fixed(0), -1.0, GenerationMode::Correlated).unwrap_err(),
            ConfigurationError::InvalidNoise(_)
        ));
        assert!(generate(10, Seed::Fixed(0), f64::NAN, GenerationMode::Correlated).is_err());
    }
}
