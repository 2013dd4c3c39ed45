use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;
use crate::core::navigation::command::NavigationCommand;
use winit::event::{ElementState, MouseButton, MouseScrollDelta};
use winit::keyboard::KeyCode;

/// Translates raw window input into navigation commands. The cursor is
/// tracked in window pixels and scaled to canvas pixels, so a window whose
/// surface differs from the canvas still zooms around the point under the
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationInput {
    canvas: CanvasSize,
    window_width: u32,
    window_height: u32,
    cursor: Option<(f64, f64)>,
    iteration_step: u32,
}

impl NavigationInput {
    #[must_use]
    pub fn new(canvas: CanvasSize, iteration_step: u32) -> Self {
        Self {
            canvas,
            window_width: canvas.width(),
            window_height: canvas.height(),
            cursor: None,
            iteration_step,
        }
    }

    pub fn resize_window(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some((x, y));
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Key repeats are treated as fresh presses; releases do nothing.
    pub fn key(&self, key_code: KeyCode, state: ElementState) -> Option<NavigationCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        match key_code {
            KeyCode::KeyW => Some(NavigationCommand::PanUp),
            KeyCode::KeyA => Some(NavigationCommand::PanLeft),
            KeyCode::KeyS => Some(NavigationCommand::PanDown),
            KeyCode::KeyD => Some(NavigationCommand::PanRight),
            KeyCode::KeyR => Some(NavigationCommand::Reset),
            _ => None,
        }
    }

    pub fn mouse_button(
        &self,
        button: MouseButton,
        state: ElementState,
    ) -> Option<NavigationCommand> {
        if state != ElementState::Pressed {
            return None;
        }

        let step = i64::from(self.iteration_step);

        match button {
            MouseButton::Left => Some(NavigationCommand::AdjustIterations(step)),
            MouseButton::Right => Some(NavigationCommand::AdjustIterations(-step)),
            _ => None,
        }
    }

    /// Scrolling up zooms in, down zooms out, both around the cursor.
    pub fn scroll(&self, delta: MouseScrollDelta) -> Option<NavigationCommand> {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => f64::from(y),
            MouseScrollDelta::PixelDelta(position) => position.y,
        };

        let pixel = self.cursor_on_canvas()?;

        if amount > 0.0 {
            Some(NavigationCommand::ZoomIn(pixel))
        } else if amount < 0.0 {
            Some(NavigationCommand::ZoomOut(pixel))
        } else {
            None
        }
    }

    #[must_use]
    pub fn cursor_on_canvas(&self) -> Option<Point> {
        let (x, y) = self.cursor?;

        if self.window_width == 0 || self.window_height == 0 || x < 0.0 || y < 0.0 {
            return None;
        }

        let scale_x = f64::from(self.canvas.width()) / f64::from(self.window_width);
        let scale_y = f64::from(self.canvas.height()) / f64::from(self.window_height);

        let pixel = Point {
            x: (x * scale_x).floor() as i32,
            y: (y * scale_y).floor() as i32,
        };

        self.canvas.contains_point(pixel).then_some(pixel)
    }
}
