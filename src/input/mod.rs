//! Input adapters for the viewer.
//!
//! This module contains adapters that receive input from the command line
//! and the window system and translate them into viewer state.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod input_state;
