use crate::core::data::complex::Complex;

/// Simulation state advanced once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderState {
    time: f32,
    time_step: f32,
    parameter: Complex,
}

impl RenderState {
    #[must_use]
    pub fn new(initial_parameter: Complex, time_step: f32) -> Self {
        Self {
            time: 0.0,
            time_step,
            parameter: initial_parameter,
        }
    }

    #[must_use]
    pub fn time(&self) -> f32 {
        self.time
    }

    #[must_use]
    pub fn time_step(&self) -> f32 {
        self.time_step
    }

    #[must_use]
    pub fn parameter(&self) -> Complex {
        self.parameter
    }

    pub fn set_parameter(&mut self, parameter: Complex) {
        self.parameter = parameter;
    }

    /// Advances time by one fixed step.
    pub fn advance(&mut self) {
        self.time += self.time_step;
    }
}
