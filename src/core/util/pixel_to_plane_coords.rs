use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideCanvas { point: Point, canvas: CanvasSize },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideCanvas { point, canvas } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} canvas",
                    point.x,
                    point.y,
                    canvas.width(),
                    canvas.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Maps a canvas pixel onto the plane through the viewport.
///
/// Offsets are measured from the integer half of each canvas dimension, so on
/// an odd-sized canvas the center pixel maps exactly to the viewport center.
pub fn pixel_to_plane_coords(
    pixel: Point,
    canvas: CanvasSize,
    viewport: &Viewport,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !canvas.contains_point(pixel) {
        return Err(PixelToPlaneCoordsError::PointOutsideCanvas {
            point: pixel,
            canvas,
        });
    }

    let offset_x = f64::from(pixel.x - canvas.half_width());
    let offset_y = f64::from(pixel.y - canvas.half_height());
    let real = viewport.center_x() + (offset_x * viewport.width()) / f64::from(canvas.width());
    let imag = viewport.center_y() + (offset_y * viewport.height()) / f64::from(canvas.height());

    Ok(Complex { real, imag })
}
