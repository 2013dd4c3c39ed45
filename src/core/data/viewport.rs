use crate::core::config::explorer_config::{ConfigError, ExplorerConfig, ViewportSettings};
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::navigation::command::NavigationCommand;
use crate::core::util::pixel_to_plane_coords::{pixel_to_plane_coords, PixelToPlaneCoordsError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    InvalidViewportState {
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        max_iterations: u32,
    },
    PointOutsideCanvas {
        point: Point,
        canvas: CanvasSize,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewportState {
                center_x,
                center_y,
                width,
                height,
                max_iterations,
            } => write!(
                f,
                "invalid viewport: center ({}, {}), extents {}x{}, max iterations {}",
                center_x, center_y, width, height, max_iterations
            ),
            Self::PointOutsideCanvas { point, canvas } => write!(
                f,
                "point (x: {}, y: {}) is outside the {}x{} canvas",
                point.x,
                point.y,
                canvas.width(),
                canvas.height()
            ),
        }
    }
}

impl Error for ViewportError {}

impl From<PixelToPlaneCoordsError> for ViewportError {
    fn from(err: PixelToPlaneCoordsError) -> Self {
        match err {
            PixelToPlaneCoordsError::PointOutsideCanvas { point, canvas } => {
                Self::PointOutsideCanvas { point, canvas }
            }
        }
    }
}

/// The visible rectangle of the plane plus the iteration budget.
///
/// Owned by the caller and mutated in place by navigation. A step that would
/// leave the viewport with non-positive or non-finite extents is refused and
/// the viewport keeps its previous state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    width: f64,
    height: f64,
    max_iterations: u32,
    settings: ViewportSettings,
}

impl Viewport {
    pub fn new(config: &ExplorerConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_settings(config.viewport_settings()?))
    }

    #[must_use]
    pub fn from_settings(settings: ViewportSettings) -> Self {
        let region = settings.initial_region;
        let center = region.center();

        Self {
            center_x: center.real,
            center_y: center.imag,
            width: region.width(),
            height: region.height(),
            max_iterations: settings.min_iterations,
            settings,
        }
    }

    pub fn from_parts(
        center_x: f64,
        center_y: f64,
        width: f64,
        height: f64,
        max_iterations: u32,
        settings: ViewportSettings,
    ) -> Result<Self, ViewportError> {
        let viewport = Self {
            center_x,
            center_y,
            width,
            height,
            max_iterations,
            settings,
        };

        viewport.check()?;

        Ok(viewport)
    }

    /// Same view with a different budget. The budget may sit below the
    /// navigation floor; only zero is rejected.
    pub fn with_max_iterations(self, max_iterations: u32) -> Result<Self, ViewportError> {
        Self::from_parts(
            self.center_x,
            self.center_y,
            self.width,
            self.height,
            max_iterations,
            self.settings,
        )
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: self.center_x,
            imag: self.center_y,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn settings(&self) -> &ViewportSettings {
        &self.settings
    }

    #[must_use]
    pub fn escape_exponent(&self) -> u32 {
        self.settings.escape_exponent
    }

    /// Magnification relative to the initial region, `1.0` at reset.
    #[must_use]
    pub fn zoom_ratio(&self) -> f64 {
        self.settings.initial_region.width() / self.width
    }

    pub fn zoom_in(&mut self, pixel: Point, canvas: CanvasSize) -> Result<(), ViewportError> {
        let scale = self.settings.zoom_scale_factor;
        let max_iterations = self
            .max_iterations
            .saturating_add(self.settings.iteration_step);

        self.zoom(pixel, canvas, 1.0 / scale, max_iterations)
    }

    pub fn zoom_out(&mut self, pixel: Point, canvas: CanvasSize) -> Result<(), ViewportError> {
        let scale = self.settings.zoom_scale_factor;
        let max_iterations = self
            .max_iterations
            .saturating_sub(self.settings.iteration_step)
            .max(self.settings.min_iterations);

        self.zoom(pixel, canvas, scale, max_iterations)
    }

    pub fn pan_up(&mut self) -> Result<(), ViewportError> {
        let step = self.height * self.settings.pan_sensitivity;
        self.pan(0.0, -step)
    }

    pub fn pan_down(&mut self) -> Result<(), ViewportError> {
        let step = self.height * self.settings.pan_sensitivity;
        self.pan(0.0, step)
    }

    pub fn pan_left(&mut self) -> Result<(), ViewportError> {
        let step = self.width * self.settings.pan_sensitivity;
        self.pan(-step, 0.0)
    }

    pub fn pan_right(&mut self) -> Result<(), ViewportError> {
        let step = self.width * self.settings.pan_sensitivity;
        self.pan(step, 0.0)
    }

    pub fn reset(&mut self) {
        *self = Self::from_settings(self.settings);
    }

    /// Shifts the budget by `delta`, never below the configured floor.
    pub fn adjust_iterations(&mut self, delta: i64) {
        let floor = i64::from(self.settings.min_iterations);
        let adjusted = i64::from(self.max_iterations)
            .saturating_add(delta)
            .clamp(floor, i64::from(u32::MAX));

        self.max_iterations = u32::try_from(adjusted).unwrap_or(u32::MAX);
    }

    pub fn apply(
        &mut self,
        command: NavigationCommand,
        canvas: CanvasSize,
    ) -> Result<(), ViewportError> {
        match command {
            NavigationCommand::ZoomIn(pixel) => self.zoom_in(pixel, canvas),
            NavigationCommand::ZoomOut(pixel) => self.zoom_out(pixel, canvas),
            NavigationCommand::PanUp => self.pan_up(),
            NavigationCommand::PanDown => self.pan_down(),
            NavigationCommand::PanLeft => self.pan_left(),
            NavigationCommand::PanRight => self.pan_right(),
            NavigationCommand::Reset => {
                self.reset();
                Ok(())
            }
            NavigationCommand::AdjustIterations(delta) => {
                self.adjust_iterations(delta);
                Ok(())
            }
        }
    }

    fn zoom(
        &mut self,
        pixel: Point,
        canvas: CanvasSize,
        extent_factor: f64,
        max_iterations: u32,
    ) -> Result<(), ViewportError> {
        let center = pixel_to_plane_coords(pixel, canvas, self)?;

        self.commit(Self {
            center_x: center.real,
            center_y: center.imag,
            width: self.width * extent_factor,
            height: self.height * extent_factor,
            max_iterations,
            settings: self.settings,
        })
    }

    fn pan(&mut self, delta_x: f64, delta_y: f64) -> Result<(), ViewportError> {
        self.commit(Self {
            center_x: self.center_x + delta_x,
            center_y: self.center_y + delta_y,
            ..*self
        })
    }

    fn commit(&mut self, candidate: Self) -> Result<(), ViewportError> {
        if let Err(err) = candidate.check() {
            tracing::warn!(error = %err, "refusing navigation step");
            return Err(err);
        }

        *self = candidate;

        Ok(())
    }

    fn check(&self) -> Result<(), ViewportError> {
        let valid = self.center_x.is_finite()
            && self.center_y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
            && self.max_iterations >= 1;

        if valid {
            Ok(())
        } else {
            Err(ViewportError::InvalidViewportState {
                center_x: self.center_x,
                center_y: self.center_y,
                width: self.width,
                height: self.height,
                max_iterations: self.max_iterations,
            })
        }
    }
}
