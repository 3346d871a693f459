use std::path::Path;

use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes `buffer` as an RGBA PNG, replacing any existing file.
pub fn write_png(path: impl AsRef<Path>, buffer: &PixelBuffer) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    let extent = buffer.extent();

    image::save_buffer_with_format(
        path,
        buffer.buffer(),
        extent.width(),
        extent.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .map_err(|source| SnapshotError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
