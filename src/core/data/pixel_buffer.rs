use crate::core::data::extent::Extent;
use thiserror::Error;

/// Tightly packed RGBA, 8 bits per channel.
pub const BYTES_PER_PIXEL: usize = 4;

fn extent_to_buffer_size(extent: Extent) -> usize {
    extent.pixel_count() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PixelBufferError {
    #[error("extent {width}x{height} needs {expected_size} bytes, buffer has {buffer_size}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// An RGBA image held on the CPU: decoded source images and read-back captures.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    extent: Extent,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            buffer: vec![0; extent_to_buffer_size(extent)],
        }
    }

    pub fn from_data(extent: Extent, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = extent_to_buffer_size(extent);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                width: extent.width(),
                height: extent.height(),
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { extent, buffer })
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn into_data(self) -> PixelBufferData {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_extent(width: u32, height: u32) -> Extent {
        Extent::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_zeroed_buffer() {
        let extent = create_extent(10, 10);
        let buffer = PixelBuffer::new(extent);

        assert_eq!(buffer.extent(), extent);
        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_data_valid() {
        let extent = create_extent(2, 1);
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // pixel (0,0) - opaque red
            0, 0, 255, 128, // pixel (1,0) - half transparent blue
        ];

        let buffer = PixelBuffer::from_data(extent, data.clone()).unwrap();

        assert_eq!(buffer.extent(), extent);
        assert_eq!(buffer.buffer(), data.as_slice());
    }

    #[test]
    fn test_from_data_rgb_sized_buffer_is_rejected() {
        let extent = create_extent(2, 2);
        let data: Vec<u8> = vec![0; 12];

        let result = PixelBuffer::from_data(extent, data);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                width: 2,
                height: 2,
                expected_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_from_data_empty_buffer_for_valid_extent() {
        let result = PixelBuffer::from_data(create_extent(1, 1), Vec::new());

        assert!(result.is_err());
    }

    #[test]
    fn test_buffer_mut_writes_through() {
        let mut buffer = PixelBuffer::new(create_extent(1, 1));
        buffer.buffer_mut()[3] = 255;

        assert_eq!(buffer.into_data(), vec![0, 0, 0, 255]);
    }
}
