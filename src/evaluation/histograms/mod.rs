mod axis;
mod histogram;
mod histogram_2d;
mod running_moments;

pub use axis::{Axis, Placement};
pub use histogram::Histogram;
pub use histogram_2d::Histogram2D;
pub use running_moments::RunningMoments;
