use crate::core::data::complex::Complex;

/// Everything the frame renderer needs to paint one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub aspect_ratio: f32,
    pub parameter: Complex,
    pub time: f32,
}
