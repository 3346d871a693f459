use std::path::{Path, PathBuf};

use crate::controllers::interactive::errors::snapshot::SnapshotError;
use crate::core::data::{extent::Extent, pixel_buffer::PixelBuffer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotReport {
    pub path: PathBuf,
    pub extent: Extent,
}

/// Persists captured frames. Called from encode worker threads.
pub trait SnapshotSinkPort: Send + Sync {
    fn write(&self, path: &Path, frame: PixelBuffer) -> Result<SnapshotReport, SnapshotError>;
}
