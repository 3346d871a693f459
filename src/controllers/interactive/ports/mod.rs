//! Port definitions for the interactive controller.
//!
//! The session reaches the GPU and the disk only through these traits.

pub mod graphics;
pub mod snapshot_sink;

pub use graphics::GraphicsPort;
pub use snapshot_sink::{SnapshotReport, SnapshotSinkPort};
