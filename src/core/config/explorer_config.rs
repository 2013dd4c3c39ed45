use crate::core::data::canvas_size::{CanvasSize, CanvasSizeError};
use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use std::error::Error;
use std::fmt;

pub const DEFAULT_CANVAS_WIDTH: u32 = 1920;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1008;
pub const DEFAULT_REGION_LEFT: f64 = -2.4;
pub const DEFAULT_REGION_RIGHT: f64 = 0.6;
pub const DEFAULT_REGION_TOP: f64 = 0.7875;
pub const DEFAULT_REGION_BOTTOM: f64 = -0.7875;
pub const DEFAULT_ESCAPE_EXPONENT: u32 = 2;
pub const DEFAULT_ZOOM_SCALE_FACTOR: f64 = 2.0;
pub const DEFAULT_PAN_SENSITIVITY: f64 = 0.25;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ITERATION_STEP: u32 = 50;

pub const MAX_CANVAS_DIMENSION: u32 = 16384;
pub const MAX_ESCAPE_EXPONENT: u32 = 30;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    CanvasSize(CanvasSizeError),
    CanvasTooLarge { width: u32, height: u32 },
    Region(PlaneRegionError),
    EscapeExponentOutOfRange(u32),
    InvalidZoomScaleFactor(f64),
    InvalidPanSensitivity(f64),
    ZeroMaxIterations,
    ZeroIterationStep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CanvasSize(err) => write!(f, "invalid canvas: {}", err),
            Self::CanvasTooLarge { width, height } => write!(
                f,
                "canvas {}x{} exceeds the {} pixel limit per side",
                width, height, MAX_CANVAS_DIMENSION
            ),
            Self::Region(err) => write!(f, "invalid default region: {}", err),
            Self::EscapeExponentOutOfRange(exponent) => write!(
                f,
                "escape exponent {} must be between 1 and {}",
                exponent, MAX_ESCAPE_EXPONENT
            ),
            Self::InvalidZoomScaleFactor(factor) => {
                write!(f, "zoom scale factor {} must be finite and greater than 1", factor)
            }
            Self::InvalidPanSensitivity(sensitivity) => {
                write!(f, "pan sensitivity {} must be in (0, 1]", sensitivity)
            }
            Self::ZeroMaxIterations => write!(f, "initial iteration budget must be at least 1"),
            Self::ZeroIterationStep => write!(f, "iteration step must be at least 1"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CanvasSize(err) => Some(err),
            Self::Region(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CanvasSizeError> for ConfigError {
    fn from(err: CanvasSizeError) -> Self {
        Self::CanvasSize(err)
    }
}

impl From<PlaneRegionError> for ConfigError {
    fn from(err: PlaneRegionError) -> Self {
        Self::Region(err)
    }
}

/// The part of the configuration a viewport needs to navigate.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportSettings {
    pub initial_region: PlaneRegion,
    pub escape_exponent: u32,
    pub zoom_scale_factor: f64,
    pub pan_sensitivity: f64,
    /// Starting budget, also the floor navigation never goes below.
    pub min_iterations: u32,
    pub iteration_step: u32,
}

/// Every tunable constant of the explorer, built once at startup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ExplorerConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub region_left: f64,
    pub region_right: f64,
    pub region_top: f64,
    pub region_bottom: f64,
    pub escape_exponent: u32,
    pub zoom_scale_factor: f64,
    pub pan_sensitivity: f64,
    pub max_iterations: u32,
    pub iteration_step: u32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            region_left: DEFAULT_REGION_LEFT,
            region_right: DEFAULT_REGION_RIGHT,
            region_top: DEFAULT_REGION_TOP,
            region_bottom: DEFAULT_REGION_BOTTOM,
            escape_exponent: DEFAULT_ESCAPE_EXPONENT,
            zoom_scale_factor: DEFAULT_ZOOM_SCALE_FACTOR,
            pan_sensitivity: DEFAULT_PAN_SENSITIVITY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            iteration_step: DEFAULT_ITERATION_STEP,
        }
    }
}

impl ExplorerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.canvas()?;
        self.default_region()?;

        if !(1..=MAX_ESCAPE_EXPONENT).contains(&self.escape_exponent) {
            return Err(ConfigError::EscapeExponentOutOfRange(self.escape_exponent));
        }

        if !self.zoom_scale_factor.is_finite() || self.zoom_scale_factor <= 1.0 {
            return Err(ConfigError::InvalidZoomScaleFactor(self.zoom_scale_factor));
        }

        if !self.pan_sensitivity.is_finite()
            || self.pan_sensitivity <= 0.0
            || self.pan_sensitivity > 1.0
        {
            return Err(ConfigError::InvalidPanSensitivity(self.pan_sensitivity));
        }

        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        if self.iteration_step == 0 {
            return Err(ConfigError::ZeroIterationStep);
        }

        Ok(())
    }

    pub fn canvas(&self) -> Result<CanvasSize, ConfigError> {
        if self.canvas_width > MAX_CANVAS_DIMENSION || self.canvas_height > MAX_CANVAS_DIMENSION {
            return Err(ConfigError::CanvasTooLarge {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(CanvasSize::new(self.canvas_width, self.canvas_height)?)
    }

    pub fn default_region(&self) -> Result<PlaneRegion, ConfigError> {
        Ok(PlaneRegion::new(
            self.region_left,
            self.region_right,
            self.region_top,
            self.region_bottom,
        )?)
    }

    pub fn viewport_settings(&self) -> Result<ViewportSettings, ConfigError> {
        self.validate()?;

        Ok(ViewportSettings {
            initial_region: self.default_region()?,
            escape_exponent: self.escape_exponent,
            zoom_scale_factor: self.zoom_scale_factor,
            pan_sensitivity: self.pan_sensitivity,
            min_iterations: self.max_iterations,
            iteration_step: self.iteration_step,
        })
    }
}
