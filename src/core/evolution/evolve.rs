use crate::core::data::complex::Complex;

/// Chooses where the fractal parameter comes from on each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvolutionMode {
    /// The parameter follows a closed orbit driven by elapsed time.
    #[default]
    Auto,
    /// The parameter follows the pointer while it is held down.
    Interactive,
}

/// Lissajous-like orbit through parameter space.
///
/// The defaults keep the parameter near the boundary of the connected Julia
/// sets, where the shapes are most detailed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub amplitude: f32,
    pub phase_real: f32,
    pub phase_imag: f32,
    pub frequency_ratio: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            amplitude: 0.75421,
            phase_real: 0.92,
            phase_imag: 1.98,
            frequency_ratio: 0.9,
        }
    }
}

impl Orbit {
    #[must_use]
    pub fn at(&self, time: f32) -> Complex {
        Complex {
            real: self.amplitude * (self.phase_real + time).cos(),
            imag: self.amplitude * (self.phase_imag + time * self.frequency_ratio).cos(),
        }
    }
}

/// Pointer state as seen by the evolution step, in normalized window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerSample {
    pub position: Complex,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evolution {
    pub mode: EvolutionMode,
    pub orbit: Orbit,
    pub pointer_scale: Complex,
}

impl Evolution {
    #[must_use]
    pub fn new(mode: EvolutionMode, orbit: Orbit, pointer_scale: Complex) -> Self {
        Self {
            mode,
            orbit,
            pointer_scale,
        }
    }

    /// Computes the parameter for the current tick.
    ///
    /// Pure: the result depends only on the arguments. In interactive mode a
    /// released pointer keeps `previous` unchanged.
    #[must_use]
    pub fn evolve(&self, time: f32, previous: Complex, pointer: PointerSample) -> Complex {
        match self.mode {
            EvolutionMode::Auto => self.orbit.at(time),
            EvolutionMode::Interactive if pointer.down => pointer.position.scale(self.pointer_scale),
            EvolutionMode::Interactive => previous,
        }
    }
}
