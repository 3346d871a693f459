//! GUI input adapter for the interactive viewer.
//!
//! This module provides a windowed interface using winit for window management
//! and input, with frames presented through a [`GuiPresenterPort`].

pub mod app;
pub mod commands;

pub use app::ports::presenter::GuiPresenterPort;
