//! Snapshot capture and asynchronous encoding.

pub mod pending;
pub mod pipeline;
pub mod registry;
pub mod worker;

pub use pending::{EncodeOutcome, PendingEncode};
pub use pipeline::SnapshotPipeline;
pub use registry::{DrainReport, EncodeRegistry};
pub use worker::EncodeWorker;
