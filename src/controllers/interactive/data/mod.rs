pub mod frame_params;
pub mod viewer_config;
