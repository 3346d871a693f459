//! Interactive controller for real-time fractal rendering.
//!
//! This module drives the per-tick session and the snapshot path.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: [`InputState`](crate::input::input_state::InputState), filled by the GUI adapter
//! - **Output**: [`GraphicsPort`] for the GPU and [`SnapshotSinkPort`] for files
//! - **Core**: parameter evolution and render state from `core/`

pub mod data;
pub mod errors;
pub mod ports;
mod session;
pub mod snapshot;
#[cfg(test)]
pub(crate) mod test_support;

pub use ports::{GraphicsPort, SnapshotReport, SnapshotSinkPort};
pub use session::{LoopState, Session, TickReport};
