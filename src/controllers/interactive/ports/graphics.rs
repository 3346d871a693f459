use crate::controllers::interactive::data::frame_params::FrameParams;
use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::core::data::{extent::Extent, pixel_buffer::PixelBuffer};

/// The GPU as seen by the session: one visible target and one capture target.
pub trait GraphicsPort {
    /// Size of the off-screen capture target.
    fn capture_extent(&self) -> Extent;

    /// Renders `frame` into the capture target, waits for the GPU to finish
    /// and returns a freshly allocated copy of its pixels.
    ///
    /// The visible target is left bound when this returns.
    fn capture(&mut self, frame: &FrameParams) -> Result<PixelBuffer, GraphicsError>;

    /// Renders `frame` into the visible target and presents it.
    fn present(&mut self, frame: &FrameParams) -> Result<(), GraphicsError>;
}
