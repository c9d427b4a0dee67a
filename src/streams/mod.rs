pub mod generators;
mod sample_stream;

pub use generators::{GenerationMode, SmearedSumGenerator, generate};
pub use sample_stream::SampleStream;
