use crate::controllers::interactive::errors::{
    graphics::GraphicsError, shader::ShaderError, snapshot::SnapshotError,
};
use crate::storage::errors::ImageLoadError;
use thiserror::Error;

/// Bad invocation or missing, unreadable or undecodable source image.
pub const EXIT_BAD_INPUT: u8 = 1;
/// Window or graphics context could not be created.
pub const EXIT_GRAPHICS: u8 = 2;
/// Shader compile or link failure.
pub const EXIT_SHADER: u8 = 3;
/// The snapshot encode workers could not be started.
pub const EXIT_WORKERS: u8 = 4;

/// Errors that stop the process before the main loop starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error(transparent)]
    Image(#[from] ImageLoadError),

    #[error(transparent)]
    Graphics(#[from] GraphicsError),

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Workers(#[from] SnapshotError),
}

impl StartupError {
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidArguments(_) | Self::Image(_) => EXIT_BAD_INPUT,
            Self::Graphics(_) => EXIT_GRAPHICS,
            Self::Shader(_) => EXIT_SHADER,
            Self::Workers(_) => EXIT_WORKERS,
        }
    }
}
