//! Interactive Mandelbrot explorer: a pure viewport model, a parallel
//! escape-time renderer with smooth colouring, and CLI and windowed fronts.

pub mod adapters;
pub mod controllers;
pub mod core;
pub mod input;
pub mod logging;
pub mod presenters;

pub use crate::controllers::cli::render_to_file::CliRenderController;
pub use crate::controllers::interactive::{InteractiveController, RenderEvent, RenderRequest};
pub use crate::core::actions::render::render::{RenderError, render, render_cancelable, render_serial};
pub use crate::core::config::explorer_config::{ConfigError, ExplorerConfig, ViewportSettings};
pub use crate::core::data::canvas_size::CanvasSize;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::escape_outcome::EscapeOutcome;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::evaluate;
pub use crate::core::fractals::mandelbrot::colour_map::{interpolate, palette_colour};
pub use crate::core::navigation::command::NavigationCommand;
pub use crate::logging::init_logging;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
