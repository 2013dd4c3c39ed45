use std::error::Error;

use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::Window,
};

use crate::controllers::interactive::{InteractiveController, RenderRequest};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::command::NavigationCommand;
use crate::input::gui::app::navigation_input::NavigationInput;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    canvas: CanvasSize,
    viewport: Viewport,
    input: NavigationInput,
    presenter: T,
    controller: InteractiveController,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    last_refused: Option<String>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        presenter: T,
        controller: InteractiveController,
        viewport: Viewport,
        canvas: CanvasSize,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None,
        );

        let mut input = NavigationInput::new(canvas, viewport.settings().iteration_step);
        let size = window.inner_size();
        input.resize_window(size.width, size.height);

        Self {
            window,
            canvas,
            viewport,
            input,
            presenter,
            controller,
            egui_ctx,
            egui_state,
            last_refused: None,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), Box<dyn Error>> {
        let window = self.window;
        let mut redraw_pending = true;

        self.submit_render_request();

        event_loop.run(|event, elwt| match event {
            Event::UserEvent(GuiEvent::Wake) => {
                redraw_pending = true;
            }
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let response = self.egui_state.on_window_event(window, event);

                if response.repaint {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        self.controller.shutdown();
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        let egui_output = self.update_overlay();
                        self.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                            tracing::error!(error = %err, "cannot present frame");
                            self.controller.shutdown();
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        self.input.resize_window(size.width, size.height);

                        if let Err(err) = self.presenter.resize(size.width, size.height) {
                            tracing::error!(error = %err, "cannot resize surface");
                        }

                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        redraw_pending = true;
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.input.cursor_moved(position.x, position.y);
                    }
                    WindowEvent::CursorLeft { .. } => {
                        self.input.cursor_left();
                    }
                    _ if response.consumed => {}
                    WindowEvent::KeyboardInput { event: key, .. } => {
                        if let PhysicalKey::Code(code) = key.physical_key {
                            if let Some(command) = self.input.key(code, key.state) {
                                self.navigate(command);
                                redraw_pending = true;
                            }
                        }
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        if let Some(command) = self.input.mouse_button(*button, *state) {
                            self.navigate(command);
                            redraw_pending = true;
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } => {
                        if let Some(command) = self.input.scroll(*delta) {
                            self.navigate(command);
                            redraw_pending = true;
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }

    /// Applies `command` and queues a render of the new view. A refused step
    /// leaves the viewport as it was and only updates the overlay.
    fn navigate(&mut self, command: NavigationCommand) {
        match self.viewport.apply(command, self.canvas) {
            Ok(()) => {
                self.last_refused = None;
                self.submit_render_request();
            }
            Err(err) => {
                self.last_refused = Some(err.to_string());
            }
        }
    }

    fn submit_render_request(&mut self) {
        let generation = self.controller.submit_request(RenderRequest {
            viewport: self.viewport,
            canvas: self.canvas,
        });

        tracing::trace!(
            generation,
            max_iterations = self.viewport.max_iterations(),
            zoom = self.viewport.zoom_ratio(),
            "view changed"
        );
    }

    fn update_overlay(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let max_iterations = self.viewport.max_iterations();
        let zoom_ratio = self.viewport.zoom_ratio();
        let message = self
            .last_refused
            .as_deref()
            .or_else(|| self.presenter.last_error())
            .map(str::to_owned);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("hud"))
                .fixed_pos(egui::pos2(10.0, 10.0))
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(format!("Max Iterations : {max_iterations}"))
                            .color(egui::Color32::WHITE)
                            .monospace(),
                    );
                    ui.label(
                        egui::RichText::new(format!("Zoom : {zoom_ratio:.6}x"))
                            .color(egui::Color32::WHITE)
                            .monospace(),
                    );

                    if let Some(message) = &message {
                        ui.colored_label(egui::Color32::LIGHT_RED, message.as_str());
                    }
                });
        })
    }
}
