use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ExtentError {
    #[error("extent size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Width and height of a render target or pixel buffer, both non-zero.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Extent {
    width: u32,
    height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Result<Self, ExtentError> {
        if width == 0 || height == 0 {
            return Err(ExtentError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}
