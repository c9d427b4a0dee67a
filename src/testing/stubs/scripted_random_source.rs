use crate::core::random::RandomSource;

/// [`RandomSource`] replaying fixed scripts, cycling when exhausted.
///
/// `normals` are standard-normal values; `gaussian` scales them by the
/// requested mean and standard deviation.
#[derive(Debug, Clone)]
pub struct ScriptedRandomSource {
    uniforms: Vec<f64>,
    normals: Vec<f64>,
    next_uniform: usize,
    next_normal: usize,
}

impl ScriptedRandomSource {
    pub fn new(uniforms: Vec<f64>, normals: Vec<f64>) -> Self {
        assert!(!uniforms.is_empty() && !normals.is_empty(), "scripts must not be empty");
        Self {
            uniforms,
            normals,
            next_uniform: 0,
            next_normal: 0,
        }
    }
}

impl RandomSource for ScriptedRandomSource {
    fn uniform(&mut self) -> f64 {
        let v = self.uniforms[self.next_uniform % self.uniforms.len()];
        self.next_uniform += 1;
        v
    }

    fn gaussian(&mut self, mean: f64, stddev: f64) -> f64 {
        let n = self.normals[self.next_normal % self.normals.len()];
        self.next_normal += 1;
        mean + stddev * n
    }

    fn restart(&mut self) {
        self.next_uniform = 0;
        self.next_normal = 0;
    }
}
