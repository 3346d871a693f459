pub mod events;
pub mod gui_app;
pub mod ports;
