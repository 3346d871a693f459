//! File access: source images, snapshots and shader sources.

pub mod errors;
pub mod read_png;
pub mod read_shader;
#[cfg(test)]
pub(crate) mod test_support;
pub mod write_png;
