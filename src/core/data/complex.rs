use std::fmt;

/// A point in the complex plane, single precision to match the shader uniforms.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f32,
    pub imag: f32,
}

impl Complex {
    #[must_use]
    pub const fn new(real: f32, imag: f32) -> Self {
        Self { real, imag }
    }

    /// Scales each axis independently.
    #[must_use]
    pub fn scale(self, factor: Complex) -> Self {
        Self {
            real: self.real * factor.real,
            imag: self.imag * factor.imag,
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f32; 2] {
        [self.real, self.imag]
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.imag < 0.0 { '-' } else { '+' };

        write!(f, "{} {} {}i", self.real, sign, self.imag.abs())
    }
}
