use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteBounds,
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane region size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteBounds => write!(f, "plane region bounds must be finite"),
        }
    }
}

impl Error for PlaneRegionError {}

/// Axis-aligned region of the complex plane given by its four edges.
///
/// `top` is the larger imaginary bound, matching the way the default view is
/// written down (`top = 0.7875`, `bottom = -0.7875`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
}

impl PlaneRegion {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, PlaneRegionError> {
        if !(left.is_finite() && right.is_finite() && top.is_finite() && bottom.is_finite()) {
            return Err(PlaneRegionError::NonFiniteBounds);
        }

        let width = right - left;
        let height = top - bottom;

        if width <= 0.0 || height <= 0.0 || !width.is_finite() || !height.is_finite() {
            return Err(PlaneRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.left + self.right) / 2.0,
            imag: (self.top + self.bottom) / 2.0,
        }
    }
}
