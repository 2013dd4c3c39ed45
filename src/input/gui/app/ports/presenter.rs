use std::sync::Arc;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        canvas: CanvasSize,
    ) -> Result<Self, pixels::Error>;

    /// Uploads the newest frame, if any, and draws the overlay on top.
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    fn last_error(&self) -> Option<&str>;
}
