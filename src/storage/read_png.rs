use std::io;
use std::path::Path;

use tracing::info;

use crate::core::actions::premultiply::premultiply_alpha;
use crate::core::data::{extent::Extent, pixel_buffer::PixelBuffer};
use crate::storage::errors::ImageLoadError;

/// Decodes an image file to straight (non-premultiplied) RGBA.
pub fn read_png(path: impl AsRef<Path>) -> Result<PixelBuffer, ImageLoadError> {
    let path = path.as_ref();

    let image = image::open(path).map_err(|source| match source {
        image::ImageError::IoError(e) if e.kind() == io::ErrorKind::NotFound => {
            ImageLoadError::Missing {
                path: path.to_path_buf(),
            }
        }
        source => ImageLoadError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let extent = Extent::new(width, height).map_err(|source| ImageLoadError::Empty {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PixelBuffer::from_data(extent, rgba.into_raw())?)
}

/// Loads the background image, premultiplied for the compositing shader.
pub fn load_source_image(path: impl AsRef<Path>) -> Result<PixelBuffer, ImageLoadError> {
    let path = path.as_ref();
    let mut image = read_png(path)?;
    premultiply_alpha(image.buffer_mut());

    let extent = image.extent();
    info!(
        "Loaded '{}' {}x{}",
        path.display(),
        extent.width(),
        extent.height()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::temp_path;
    use crate::storage::write_png::write_png;

    #[test]
    fn missing_file_is_reported_as_missing() {
        let result = read_png(temp_path("does-not-exist.png"));

        assert!(matches!(result, Err(ImageLoadError::Missing { .. })));
    }

    #[test]
    fn garbage_file_is_a_decode_error() {
        let path = temp_path("garbage.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = read_png(&path);

        assert!(matches!(result, Err(ImageLoadError::Decode { .. })));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn write_then_read_is_lossless() {
        let path = temp_path("roundtrip.png");
        let extent = Extent::new(3, 2).unwrap();
        let data: Vec<u8> = (0..extent.pixel_count() as u8 * 4)
            .map(|i| i.wrapping_mul(37))
            .collect();
        let original = PixelBuffer::from_data(extent, data).unwrap();

        write_png(&path, &original).unwrap();
        let decoded = read_png(&path).unwrap();

        assert_eq!(decoded, original);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn source_image_is_premultiplied() {
        let path = temp_path("source.png");
        let extent = Extent::new(1, 1).unwrap();
        write_png(&path, &PixelBuffer::from_data(extent, vec![100, 50, 200, 128]).unwrap())
            .unwrap();

        let image = load_source_image(&path).unwrap();

        assert_eq!(image.buffer(), &[50, 25, 100, 128]);
        let _ = std::fs::remove_file(path);
    }
}
