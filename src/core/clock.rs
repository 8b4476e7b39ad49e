/// Elapsed-time accumulator fed to the shader's `time` uniform.
#[derive(Default, Clone, Copy, Debug)]
pub struct ShaderClock {
    elapsed: f32,
}

impl ShaderClock {
    /// Advance by one frame's delta and return the new elapsed time.
    /// Negative or non-finite deltas are ignored.
    #[inline]
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed += dt_sec;
        }
        self.elapsed
    }

    #[allow(dead_code)] // host tests
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
