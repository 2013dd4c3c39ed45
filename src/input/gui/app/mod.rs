pub mod gui_app;
pub mod navigation_input;
pub mod ports;
