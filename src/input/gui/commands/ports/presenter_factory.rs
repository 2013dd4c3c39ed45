use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::canvas_size::CanvasSize;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        canvas: CanvasSize,
    ) -> Result<T, pixels::Error>;
}
