//! Real-time Julia fractal viewer composited over a background image, with
//! asynchronous high resolution PNG snapshots.

pub mod controllers;
pub mod core;
pub mod input;
pub mod presenters;
pub mod storage;

pub use crate::controllers::interactive::data::viewer_config::ViewerConfig;
pub use crate::controllers::interactive::errors::startup::{EXIT_BAD_INPUT, StartupError};
pub use crate::controllers::interactive::snapshot::DrainReport;
pub use crate::core::actions::premultiply::premultiply_alpha;
pub use crate::core::data::{complex::Complex, extent::Extent, pixel_buffer::PixelBuffer};
pub use crate::core::evolution::EvolutionMode;
pub use crate::input::cli::Cli;
pub use crate::storage::{read_png::load_source_image, write_png::write_png};

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
