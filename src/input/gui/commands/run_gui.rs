use std::error::Error;
use std::marker::PhantomData;

use winit::{
    dpi::PhysicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::config::explorer_config::ExplorerConfig;
use crate::core::data::viewport::Viewport;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::events::GuiEvent;

const WINDOW_TITLE: &str = "Fractal Navigator";

/// Opens a fixed-size window at the canvas resolution and runs the explorer
/// until it is closed.
pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let canvas = self.config.canvas()?;
        let viewport = Viewport::new(&self.config)?;

        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(canvas.width(), canvas.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        tracing::info!(
            width = canvas.width(),
            height = canvas.height(),
            "window opened"
        );

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy, canvas)?;
        let controller = InteractiveController::new(presenter.share_adapter());
        let app = GuiApp::new(window, &event_loop, presenter, controller, viewport, canvas);

        app.run(event_loop)
    }
}
