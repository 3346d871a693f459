use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("cannot read shader file \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error compiling shader {label}:\n{diagnostic}")]
    Compile { label: String, diagnostic: String },

    #[error("error linking program:\n{diagnostic}")]
    Link { diagnostic: String },
}
