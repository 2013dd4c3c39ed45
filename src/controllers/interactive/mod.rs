//! Background rendering for interactive exploration.
//!
//! The GUI submits a [`RenderRequest`] after every navigation step. Only the
//! newest request is kept; a pass made stale by a newer submission is
//! cancelled and never reported.

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
pub use data::render_request::RenderRequest;
pub use events::render::RenderEvent;
