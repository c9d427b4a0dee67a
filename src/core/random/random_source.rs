/// Seedable source of the two draw kinds the generator consumes.
///
/// Every call advances one shared stream, so the order in which callers draw
/// is part of the reproducibility contract.
pub trait RandomSource {
    /// Uniform draw on `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Normal draw with the given mean and standard deviation.
    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64;

    /// Rewinds to the first draw of the stream.
    fn restart(&mut self);
}
