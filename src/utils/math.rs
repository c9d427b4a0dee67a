use std::f64::consts::SQRT_2;

/// Standard normal CDF.
pub fn normal_probability(a: f64) -> f64 {
    0.5 * (1.0 + libm::erf(a / SQRT_2))
}

/// Probability that a centred normal variable with standard deviation
/// `sigma` falls within `[-half_width, half_width]`.
///
/// A zero `sigma` is a point mass at the origin.
pub fn normal_coverage(half_width: f64, sigma: f64) -> f64 {
    if half_width < 0.0 {
        return 0.0;
    }
    if sigma == 0.0 {
        return 1.0;
    }
    let k = half_width / sigma;
    normal_probability(k) - normal_probability(-k)
}
