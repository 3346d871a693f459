use std::path::PathBuf;

use clap::Parser;

use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::errors::startup::StartupError;
use crate::core::data::extent::Extent;
use crate::core::evolution::EvolutionMode;

/// Real-time Julia fractal over a background image. Space takes a snapshot,
/// Q or closing the window quits.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fractrap", version)]
pub struct Cli {
    /// Background image, PNG with alpha.
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Drag the pointer to set the fractal parameter instead of evolving it over time.
    #[arg(short, long)]
    pub mouse: bool,

    /// Snapshot output path, overwritten on every snapshot.
    #[arg(short, long, value_name = "PATH", default_value = "snap.png")]
    pub output: PathBuf,

    /// Snapshot width in pixels.
    #[arg(long, default_value_t = 8192, value_parser = clap::value_parser!(u32).range(1..))]
    pub capture_width: u32,

    /// Snapshot height in pixels.
    #[arg(long, default_value_t = 6224, value_parser = clap::value_parser!(u32).range(1..))]
    pub capture_height: u32,

    /// WGSL vertex stage exporting `vs_main`, replacing the built-in one.
    #[arg(long, value_name = "PATH")]
    pub vertex_shader: Option<PathBuf>,

    /// WGSL fragment stage exporting `fs_main`, replacing the built-in one.
    #[arg(long, value_name = "PATH")]
    pub fragment_shader: Option<PathBuf>,

    /// Present as fast as possible instead of waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,

    /// Log per-event detail.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<ViewerConfig, StartupError> {
        let capture_size = Extent::new(self.capture_width, self.capture_height)
            .map_err(|e| StartupError::InvalidArguments(e.to_string()))?;

        let mode = if self.mouse {
            EvolutionMode::Interactive
        } else {
            EvolutionMode::Auto
        };

        Ok(ViewerConfig {
            image_path: self.image,
            mode,
            capture_size,
            snapshot_path: self.output,
            vsync: !self.no_vsync,
            vertex_shader: self.vertex_shader,
            fragment_shader: self.fragment_shader,
            ..ViewerConfig::default()
        })
    }
}
