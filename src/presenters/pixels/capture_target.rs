use std::sync::mpsc;

use pixels::wgpu;
use tracing::debug;

use crate::controllers::interactive::errors::graphics::GraphicsError;
use crate::core::data::extent::Extent;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

/// Off-screen texture for snapshots plus the buffer it is read back through.
///
/// Both are allocated once at startup and reused by every capture.
pub struct CaptureTarget {
    extent: Extent,
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    readback: wgpu::Buffer,
    padded_bytes_per_row: u32,
}

impl CaptureTarget {
    pub fn new(
        device: &wgpu::Device,
        extent: Extent,
        format: wgpu::TextureFormat,
    ) -> Result<Self, GraphicsError> {
        let limits = device.limits();
        let limit = limits.max_texture_dimension_2d;
        if extent.width() > limit || extent.height() > limit {
            return Err(GraphicsError::TooLarge {
                what: "capture target",
                extent,
                limit,
            });
        }

        let padded_bytes_per_row = padded_bytes_per_row(extent.width());
        let readback_size = u64::from(padded_bytes_per_row) * u64::from(extent.height());
        if readback_size > limits.max_buffer_size {
            let max_rows = limits.max_buffer_size / u64::from(padded_bytes_per_row);
            return Err(GraphicsError::TooLarge {
                what: "capture readback buffer",
                extent,
                limit: u32::try_from(max_rows).unwrap_or(u32::MAX),
            });
        }

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("fractrap_capture"),
            size: texture_size(extent),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractrap_capture_readback"),
            size: readback_size,
            usage: wgpu::BufferUsages::COPY_DST | wgpu::BufferUsages::MAP_READ,
            mapped_at_creation: false,
        });

        debug!(
            "Capture target {}x{} ({} bytes per padded row)",
            extent.width(),
            extent.height(),
            padded_bytes_per_row
        );

        Ok(Self {
            extent,
            texture,
            view,
            readback,
            padded_bytes_per_row,
        })
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        self.extent
    }

    #[must_use]
    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    /// Records the texture to readback buffer copy into `encoder`.
    pub fn copy_to_readback(&self, encoder: &mut wgpu::CommandEncoder) {
        encoder.copy_texture_to_buffer(
            wgpu::ImageCopyTexture {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            wgpu::ImageCopyBuffer {
                buffer: &self.readback,
                layout: wgpu::ImageDataLayout {
                    offset: 0,
                    bytes_per_row: Some(self.padded_bytes_per_row),
                    rows_per_image: Some(self.extent.height()),
                },
            },
            texture_size(self.extent),
        );
    }

    /// Blocks until the GPU has finished every submitted copy, then returns
    /// the tightly packed RGBA rows in a fresh buffer.
    pub fn read_back(&self, device: &wgpu::Device) -> Result<PixelBuffer, GraphicsError> {
        let slice = self.readback.slice(..);
        let (tx, rx) = mpsc::channel();
        slice.map_async(wgpu::MapMode::Read, move |res| {
            let _ = tx.send(res);
        });
        let _ = device.poll(wgpu::Maintain::Wait);

        rx.recv()
            .map_err(|_| GraphicsError::Readback("readback channel closed".to_string()))?
            .map_err(|e| GraphicsError::Readback(format!("readback map failed: {e}")))?;

        let pixels = {
            let mapped = slice.get_mapped_range();
            unpad_rows(&mapped, self.extent, self.padded_bytes_per_row)
        };
        self.readback.unmap();

        Ok(PixelBuffer::from_data(self.extent, pixels)?)
    }
}

fn texture_size(extent: Extent) -> wgpu::Extent3d {
    wgpu::Extent3d {
        width: extent.width(),
        height: extent.height(),
        depth_or_array_layers: 1,
    }
}

fn padded_bytes_per_row(width: u32) -> u32 {
    align_to(width * BYTES_PER_PIXEL as u32, wgpu::COPY_BYTES_PER_ROW_ALIGNMENT)
}

fn align_to(value: u32, alignment: u32) -> u32 {
    let mask = alignment - 1;
    (value + mask) & !mask
}

fn unpad_rows(padded: &[u8], extent: Extent, padded_bytes_per_row: u32) -> Vec<u8> {
    let row_bytes = extent.width() as usize * BYTES_PER_PIXEL;
    let padded_row_bytes = padded_bytes_per_row as usize;
    let mut out = Vec::with_capacity(row_bytes * extent.height() as usize);

    for row in padded.chunks(padded_row_bytes).take(extent.height() as usize) {
        out.extend_from_slice(&row[..row_bytes]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_padded_to_copy_alignment() {
        assert_eq!(padded_bytes_per_row(64), 256);
        assert_eq!(padded_bytes_per_row(65), 512);
        assert_eq!(padded_bytes_per_row(8192), 8192 * 4);
    }

    #[test]
    fn unpad_drops_row_padding() {
        let extent = Extent::new(2, 3).unwrap();
        let padded_row = 16;
        let mut padded = vec![0xEE; padded_row * 3];
        for row in 0..3 {
            for byte in 0..8 {
                padded[row * padded_row + byte] = (row * 8 + byte) as u8;
            }
        }

        let out = unpad_rows(&padded, extent, padded_row as u32);

        assert_eq!(out, (0..24).collect::<Vec<u8>>());
    }
}
