use std::path::Path;

use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::controllers::interactive::ports::{SnapshotReport, SnapshotSinkPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_png::write_png;

/// Writes snapshots as lossless RGBA PNG files.
#[derive(Debug, Default)]
pub struct PngSnapshotSink {}

impl PngSnapshotSink {
    pub fn new() -> Self {
        Self {}
    }
}

impl SnapshotSinkPort for PngSnapshotSink {
    fn write(&self, path: &Path, frame: PixelBuffer) -> Result<SnapshotReport, SnapshotError> {
        write_png(path, &frame)?;

        Ok(SnapshotReport {
            path: path.to_path_buf(),
            extent: frame.extent(),
        })
    }
}
