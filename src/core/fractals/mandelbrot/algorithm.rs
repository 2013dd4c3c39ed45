use std::f64::consts::LN_2;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::escape_outcome::EscapeOutcome;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::util::pixel_to_plane_coords::{pixel_to_plane_coords, PixelToPlaneCoordsError};

/// Iterates `z -> z^2 + c` from `z = 0` until `|z|^2` exceeds `2^escape_exponent`
/// or the budget runs out. A point only counts as escaped when it leaves
/// before the last allowed iteration.
///
/// Uses the three-multiplication form: with `x2 = x^2`, `y2 = y^2` and
/// `w = (x + y)^2`, the imaginary part `2xy` is `w - x2 - y2`.
#[must_use]
pub fn evaluate(c: Complex, escape_exponent: u32, max_iterations: u32) -> EscapeOutcome {
    let bailout = 2f64.powi(i32::try_from(escape_exponent).unwrap_or(i32::MAX));
    let mut x2 = 0.0;
    let mut y2 = 0.0;
    let mut w = 0.0;
    let mut iteration = 0;

    while x2 + y2 <= bailout && iteration < max_iterations {
        let x = x2 - y2 + c.real;
        let y = w - x2 - y2 + c.imag;
        x2 = x * x;
        y2 = y * y;
        w = (x + y) * (x + y);
        iteration += 1;
    }

    if iteration >= max_iterations {
        return EscapeOutcome::bounded(iteration);
    }

    let log_zn = (x2 + y2).ln() / 2.0;
    let nu = (log_zn / LN_2).ln() / LN_2;
    let smooth_index = f64::from(iteration) + 1.0 - nu;

    if smooth_index.is_finite() {
        EscapeOutcome::escaped(iteration, smooth_index)
    } else {
        EscapeOutcome::escaped(iteration, f64::from(iteration))
    }
}

/// Evaluates canvas pixels against a fixed viewport snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    canvas: CanvasSize,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, canvas: CanvasSize) -> Self {
        Self { viewport, canvas }
    }

    #[must_use]
    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = EscapeOutcome;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_plane_coords(pixel, self.canvas, &self.viewport)?;

        Ok(evaluate(
            c,
            self.viewport.escape_exponent(),
            self.viewport.max_iterations(),
        ))
    }
}
