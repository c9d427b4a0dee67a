mod samples;

pub use samples::four_samples;
