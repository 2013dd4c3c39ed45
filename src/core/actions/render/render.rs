use std::error::Error;
use std::fmt;
use std::time::Instant;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon_cancelable, GenerateFractalError,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    generate_pixel_buffer, generate_pixel_buffer_cancelable, GeneratePixelBufferCancelableError,
    GeneratePixelBufferError,
};
use crate::core::config::explorer_config::MAX_CANVAS_DIMENSION;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::SmoothPaletteColourMap;
use crate::core::util::pixel_to_plane_coords::PixelToPlaneCoordsError;

#[derive(Debug)]
pub enum RenderError {
    InvalidCanvasSize { width: u32, height: u32 },
    Algorithm(PixelToPlaneCoordsError),
    PixelBuffer(GeneratePixelBufferError),
    Cancelled(Cancelled),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCanvasSize { width, height } => {
                write!(f, "cannot render to a {}x{} canvas", width, height)
            }
            Self::Algorithm(err) => write!(f, "algorithm error: {}", err),
            Self::PixelBuffer(err) => write!(f, "{}", err),
            Self::Cancelled(c) => write!(f, "{}", c),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidCanvasSize { .. } => None,
            Self::Algorithm(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
            Self::Cancelled(c) => Some(c),
        }
    }
}

impl From<GenerateFractalError<PixelToPlaneCoordsError>> for RenderError {
    fn from(err: GenerateFractalError<PixelToPlaneCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Algorithm(e),
        }
    }
}

impl From<GeneratePixelBufferCancelableError> for RenderError {
    fn from(err: GeneratePixelBufferCancelableError) -> Self {
        match err {
            GeneratePixelBufferCancelableError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferCancelableError::ColourMap(e) => {
                Self::PixelBuffer(GeneratePixelBufferError::ColourMap(e))
            }
            GeneratePixelBufferCancelableError::PixelBuffer(e) => {
                Self::PixelBuffer(GeneratePixelBufferError::PixelBuffer(e))
            }
        }
    }
}

impl From<GeneratePixelBufferError> for RenderError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Zero sides and sides above [`MAX_CANVAS_DIMENSION`] are both refused.
fn canvas_for(width: u32, height: u32) -> Result<CanvasSize, RenderError> {
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(RenderError::InvalidCanvasSize { width, height });
    }

    CanvasSize::new(width, height).map_err(|_| RenderError::InvalidCanvasSize { width, height })
}

/// Renders `viewport` into a fresh `canvas_width` x `canvas_height` buffer.
///
/// Rows are evaluated on the rayon pool. The output only depends on the
/// arguments, so identical inputs give bit-identical buffers.
pub fn render(
    viewport: &Viewport,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<PixelBuffer, RenderError> {
    let canvas = canvas_for(canvas_width, canvas_height)?;

    render_cancelable(viewport, canvas, &NeverCancel)
}

/// [`render`] on the calling thread only.
pub fn render_serial(
    viewport: &Viewport,
    canvas_width: u32,
    canvas_height: u32,
) -> Result<PixelBuffer, RenderError> {
    let canvas = canvas_for(canvas_width, canvas_height)?;
    let algorithm = MandelbrotAlgorithm::new(*viewport, canvas);
    let colour_map = SmoothPaletteColourMap::new(viewport.max_iterations());

    let outcomes = generate_fractal(canvas, &algorithm).map_err(RenderError::Algorithm)?;

    Ok(generate_pixel_buffer(outcomes, &colour_map, canvas)?)
}

pub fn render_cancelable<C: CancelToken + ?Sized>(
    viewport: &Viewport,
    canvas: CanvasSize,
    cancel: &C,
) -> Result<PixelBuffer, RenderError> {
    let start = Instant::now();
    let algorithm = MandelbrotAlgorithm::new(*viewport, canvas);
    let colour_map = SmoothPaletteColourMap::new(viewport.max_iterations());

    tracing::debug!(
        width = canvas.width(),
        height = canvas.height(),
        max_iterations = viewport.max_iterations(),
        "render started"
    );

    let outcomes = generate_fractal_parallel_rayon_cancelable(canvas, &algorithm, cancel)?;

    if cancel.is_cancelled() {
        return Err(RenderError::Cancelled(Cancelled));
    }

    let pixel_buffer = generate_pixel_buffer_cancelable(outcomes, &colour_map, canvas, cancel)?;

    tracing::debug!(elapsed = ?start.elapsed(), "render finished");

    Ok(pixel_buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::explorer_config::ExplorerConfig;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn default_viewport() -> Viewport {
        Viewport::new(&ExplorerConfig::default()).unwrap()
    }

    #[test]
    fn test_render_produces_buffer_of_canvas_size() {
        let buffer = render(&default_viewport(), 16, 9).unwrap();

        assert_eq!(buffer.canvas(), CanvasSize::new(16, 9).unwrap());
        assert_eq!(buffer.buffer().len(), 16 * 9 * 3);
    }

    #[test]
    fn test_render_rejects_zero_dimensions() {
        for (width, height) in [(0, 10), (10, 0), (0, 0)] {
            let result = render(&default_viewport(), width, height);

            assert!(matches!(
                result,
                Err(RenderError::InvalidCanvasSize { width: w, height: h }) if w == width && h == height
            ));
        }
    }

    #[test]
    fn test_render_rejects_oversized_canvas() {
        for (width, height) in [(MAX_CANVAS_DIMENSION + 1, 4), (4, u32::MAX)] {
            let result = render_serial(&default_viewport(), width, height);

            assert!(matches!(
                result,
                Err(RenderError::InvalidCanvasSize { width: w, height: h }) if w == width && h == height
            ));
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let viewport = default_viewport();

        let first = render(&viewport, 32, 17).unwrap();
        let second = render(&viewport, 32, 17).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut viewport = default_viewport();
        let canvas = CanvasSize::new(40, 21).unwrap();
        viewport.zoom_in(Point { x: 13, y: 7 }, canvas).unwrap();

        let parallel = render(&viewport, 40, 21).unwrap();
        let serial = render_serial(&viewport, 40, 21).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_center_of_default_view_is_black() {
        // The canvas center maps to (-0.9, 0) which lies inside the set.
        let buffer = render(&default_viewport(), 5, 5).unwrap();

        assert_eq!(buffer.pixel(Point { x: 2, y: 2 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_render_cancelable_reports_cancellation() {
        let canvas = CanvasSize::new(8, 8).unwrap();
        let cancel = || true;

        let result = render_cancelable(&default_viewport(), canvas, &cancel);

        assert!(matches!(result, Err(RenderError::Cancelled(_))));
    }

    #[test]
    fn test_render_error_display() {
        let err = RenderError::InvalidCanvasSize { width: 0, height: 4 };

        assert_eq!(err.to_string(), "cannot render to a 0x4 canvas");
    }
}
