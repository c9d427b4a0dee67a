mod smeared_sum;

pub use smeared_sum::{GenerationMode, SmearedSumGenerator, generate};
