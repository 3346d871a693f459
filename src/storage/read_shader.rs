use std::borrow::Cow;
use std::path::Path;

use crate::controllers::interactive::errors::shader::ShaderError;

const IDENTITY_VERTEX_SHADER: &str = include_str!("../../shaders/identity.wgsl");
const JULIA_FRAGMENT_SHADER: &str = include_str!("../../shaders/julia.wgsl");

/// WGSL source of one shader stage and the name it is reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    pub label: String,
    pub code: Cow<'static, str>,
}

impl ShaderSource {
    fn builtin(label: &str, code: &'static str) -> Self {
        Self {
            label: label.to_string(),
            code: Cow::Borrowed(code),
        }
    }

    fn from_file(path: &Path) -> Result<Self, ShaderError> {
        Ok(Self {
            label: path.display().to_string(),
            code: Cow::Owned(read_shader_source(path)?),
        })
    }
}

/// The vertex and fragment stages of the fractal program.
///
/// The vertex stage must export `vs_main` and the fragment stage `fs_main`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    pub vertex: ShaderSource,
    pub fragment: ShaderSource,
}

impl ShaderSources {
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            vertex: ShaderSource::builtin("identity.wgsl", IDENTITY_VERTEX_SHADER),
            fragment: ShaderSource::builtin("julia.wgsl", JULIA_FRAGMENT_SHADER),
        }
    }

    /// Built-in stages, each replaced by the file at its path when one is given.
    pub fn load(vertex: Option<&Path>, fragment: Option<&Path>) -> Result<Self, ShaderError> {
        let mut sources = Self::builtin();

        if let Some(path) = vertex {
            sources.vertex = ShaderSource::from_file(path)?;
        }
        if let Some(path) = fragment {
            sources.fragment = ShaderSource::from_file(path)?;
        }

        Ok(sources)
    }
}

pub fn read_shader_source(path: impl AsRef<Path>) -> Result<String, ShaderError> {
    let path = path.as_ref();

    std::fs::read_to_string(path).map_err(|source| ShaderError::Read {
        path: path.to_path_buf(),
        source,
    })
}
