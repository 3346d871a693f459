use crate::core::data::pixel_buffer::PixelBufferError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot \"{}\": {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("snapshot buffer is malformed: {0}")]
    Buffer(#[from] PixelBufferError),

    #[error("encode worker stopped before reporting a result")]
    WorkerLost,

    #[error("failed to start encode workers: {0}")]
    WorkerPool(String),
}
