mod generation_mode;
mod smeared_sum_generator;

pub use generation_mode::GenerationMode;
pub use smeared_sum_generator::{SmearedSumGenerator, generate};
