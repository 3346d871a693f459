pub mod complex;
pub mod extent;
pub mod pixel_buffer;
