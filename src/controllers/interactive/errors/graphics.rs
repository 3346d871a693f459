use crate::core::data::{extent::Extent, pixel_buffer::PixelBufferError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphicsError {
    #[error("failed to create the event loop: {0}")]
    EventLoop(String),

    #[error("failed to create the window: {0}")]
    Window(String),

    #[error("failed to create the graphics context: {0}")]
    Context(String),

    #[error("{what} of {}x{} exceeds the device limit of {limit} pixels per side", .extent.width(), .extent.height())]
    TooLarge {
        what: &'static str,
        extent: Extent,
        limit: u32,
    },

    #[error("capture readback failed: {0}")]
    Readback(String),

    #[error("read back pixels do not fit the capture target: {0}")]
    ReadbackSize(#[from] PixelBufferError),

    #[error("failed to present frame: {0}")]
    Present(String),
}
