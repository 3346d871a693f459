use std::path::PathBuf;

use crate::core::data::{complex::Complex, extent::Extent};
use crate::core::evolution::{EvolutionMode, Orbit};

const DEFAULT_SNAPSHOT_PATH: &str = "snap.png";
const DEFAULT_TIME_STEP: f32 = 0.015;
const DEFAULT_ENCODE_THREADS: usize = 2;

pub(crate) fn default_window_size() -> Extent {
    Extent::new(800, 600).expect("default window size is valid")
}

pub(crate) fn default_min_window_size() -> Extent {
    Extent::new(200, 200).expect("default minimum window size is valid")
}

pub(crate) fn default_capture_size() -> Extent {
    Extent::new(8192, 6224).expect("default capture size is valid")
}

/// Every tunable of a viewer session, fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub image_path: PathBuf,
    pub mode: EvolutionMode,
    pub window_title: String,
    pub window_size: Extent,
    pub min_window_size: Extent,
    /// Snapshot resolution, independent of the window size.
    pub capture_size: Extent,
    pub snapshot_path: PathBuf,
    pub vsync: bool,
    pub initial_parameter: Complex,
    pub time_step: f32,
    pub pointer_scale: Complex,
    pub orbit: Orbit,
    pub encode_threads: usize,
    pub vertex_shader: Option<PathBuf>,
    pub fragment_shader: Option<PathBuf>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::new(),
            mode: EvolutionMode::default(),
            window_title: "Fractrap".to_string(),
            window_size: default_window_size(),
            min_window_size: default_min_window_size(),
            capture_size: default_capture_size(),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            vsync: true,
            initial_parameter: Complex::new(0.687, 0.312),
            time_step: DEFAULT_TIME_STEP,
            pointer_scale: Complex::new(2.0, 2.0),
            orbit: Orbit::default(),
            encode_threads: DEFAULT_ENCODE_THREADS,
            vertex_shader: None,
            fragment_shader: None,
        }
    }
}
