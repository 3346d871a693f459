//! GPU presentation through a `pixels` surface with a custom wgpu pipeline.

pub mod capture_target;
pub mod factory;
pub mod frame_renderer;
pub mod presenter;
mod shader_program;
