use std::path::PathBuf;
use thiserror::Error;

use crate::core::data::{extent::ExtentError, pixel_buffer::PixelBufferError};

#[derive(Debug, Error)]
pub enum ImageLoadError {
    #[error("image file \"{}\" does not exist", .path.display())]
    Missing { path: PathBuf },

    #[error("failed to load file \"{}\": {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image \"{}\" is empty: {source}", .path.display())]
    Empty {
        path: PathBuf,
        #[source]
        source: ExtentError,
    },

    #[error("decoded image has an unexpected layout: {0}")]
    Layout(#[from] PixelBufferError),
}
