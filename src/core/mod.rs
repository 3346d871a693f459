//! Domain types and pure operations: no windowing, GPU or file access.

pub mod actions;
pub mod data;
pub mod evolution;
