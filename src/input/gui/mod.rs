//! Windowed explorer: winit for the window and input, pixels for the
//! framebuffer and egui for the overlay.

pub mod app;
pub mod commands;
pub mod events;

pub use commands::run_gui::RunGuiCommand;
