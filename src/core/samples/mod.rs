mod sample;
mod variable;

pub use sample::Sample;
pub use variable::Variable;
