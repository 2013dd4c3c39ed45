//! Input adapters turning user input into navigation commands.

#[cfg(feature = "gui")]
pub mod gui;
