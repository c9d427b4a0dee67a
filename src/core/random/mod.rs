mod random_source;
mod seed;
mod std_random_source;

pub use random_source::RandomSource;
pub use seed::Seed;
pub use std_random_source::StdRandomSource;
