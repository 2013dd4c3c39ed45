use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::point::Point;

/// Single-threaded reference pass, row-major from the top-left pixel.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    canvas: CanvasSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    let width = canvas.width() as i32;
    let height = canvas.height() as i32;

    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::fmt;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct StubCoordinateAlgorithm {}

    impl FractalAlgorithm for StubCoordinateAlgorithm {
        type Success = (i32, i32);
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x, pixel.y))
        }
    }

    struct StubFailOnPixelAlgorithm {
        fail_at: Point,
    }

    impl FractalAlgorithm for StubFailOnPixelAlgorithm {
        type Success = ();
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            if pixel == self.fail_at {
                Err(StubError {})
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_visits_pixels_in_row_major_order() {
        let canvas = CanvasSize::new(3, 2).unwrap();

        let results = generate_fractal(canvas, &StubCoordinateAlgorithm {}).unwrap();

        assert_eq!(
            results,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_single_pixel_canvas() {
        let canvas = CanvasSize::new(1, 1).unwrap();

        let results = generate_fractal(canvas, &StubCoordinateAlgorithm {}).unwrap();

        assert_eq!(results, vec![(0, 0)]);
    }

    #[test]
    fn test_propagates_algorithm_failure() {
        let canvas = CanvasSize::new(4, 4).unwrap();
        let algorithm = StubFailOnPixelAlgorithm {
            fail_at: Point { x: 2, y: 3 },
        };

        assert_eq!(generate_fractal(canvas, &algorithm), Err(StubError {}));
    }
}
