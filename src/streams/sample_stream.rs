use crate::core::Sample;

/// Pull-based source of [`Sample`]s.
///
/// Implementations may be bounded (a fixed number of samples) or unbounded.
pub trait SampleStream {
    /// Indicates whether the stream may produce more samples.
    ///
    /// If it returns `false`, a subsequent call to [`next_sample`] must return
    /// `None`.
    ///
    /// [`next_sample`]: SampleStream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` if the stream is exhausted.
    fn next_sample(&mut self) -> Option<Sample>;

    /// Resets the stream to its initial state.
    ///
    /// For generators this re-seeds the random source and clears counters, so
    /// the same sequence of samples is produced again.
    fn restart(&mut self);
}
