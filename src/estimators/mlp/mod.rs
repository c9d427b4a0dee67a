mod layer;
mod mlp;
mod normalizer;

pub use mlp::{Mlp, MlpModel};
