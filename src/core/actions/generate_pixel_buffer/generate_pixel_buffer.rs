use crate::core::actions::cancellation::{
    CancelToken, Cancelled, NeverCancel, CANCEL_CHECK_INTERVAL_PIXELS,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::canvas_size::CanvasSize;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{
    PixelBuffer, PixelBufferData, PixelBufferError, BYTES_PER_PIXEL,
};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Cancelable variant of [`GeneratePixelBufferError`].
#[derive(Debug)]
pub enum GeneratePixelBufferCancelableError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(&**err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Colours each input value in order and packs the result into a buffer for
/// `canvas`. The input must hold exactly one value per canvas pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    canvas: CanvasSize,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, canvas, &NeverCancel).map_err(|e| match e {
        GeneratePixelBufferCancelableError::ColourMap(err) => {
            GeneratePixelBufferError::ColourMap(err)
        }
        GeneratePixelBufferCancelableError::PixelBuffer(err) => {
            GeneratePixelBufferError::PixelBuffer(err)
        }
        GeneratePixelBufferCancelableError::Cancelled(_) => {
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Streams RGB bytes into a preallocated buffer, polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    canvas: CanvasSize,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferCancelableError>
where
    CMap: ColourMap<T>,
    C: CancelToken + ?Sized,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * BYTES_PER_PIXEL);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(value)
            .map_err(GeneratePixelBufferCancelableError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    PixelBuffer::from_data(canvas, buffer).map_err(GeneratePixelBufferCancelableError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u8> for StubColourMapSuccess {
        fn map(&self, value: u8) -> Result<Colour, Box<dyn Error>> {
            Ok(Colour {
                r: value,
                g: value,
                b: value,
            })
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u8> for StubColourMapFailure {
        fn map(&self, _: u8) -> Result<Colour, Box<dyn Error>> {
            Err("StubColourMapError".into())
        }
    }

    fn canvas(width: u32, height: u32) -> CanvasSize {
        CanvasSize::new(width, height).unwrap()
    }

    #[test]
    fn test_generates_pixel_buffer_correctly() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let canvas = canvas(3, 2);
        let expected: PixelBufferData = vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6];

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, canvas).unwrap();

        assert_eq!(results.buffer(), &expected);
        assert_eq!(results.canvas(), canvas);
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];

        let results = generate_pixel_buffer(input, &StubColourMapFailure {}, canvas(3, 2));

        assert!(matches!(results, Err(GeneratePixelBufferError::ColourMap(_))));
    }

    #[test]
    fn test_input_size_mismatch_returns_err() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];

        let results = generate_pixel_buffer(input, &StubColourMapSuccess {}, canvas(2, 2));

        assert!(matches!(
            results,
            Err(GeneratePixelBufferError::PixelBuffer(
                PixelBufferError::BoundsMismatch {
                    canvas_size: 12,
                    buffer_size: 18
                }
            ))
        ));
    }

    #[test]
    fn test_cancelable_returns_cancelled_when_token_is_cancelled() {
        let input: Vec<u8> = vec![1, 2, 3, 4, 5, 6];
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_pixel_buffer_cancelable(
            input,
            &StubColourMapSuccess {},
            canvas(3, 2),
            &cancel_token,
        );

        assert!(matches!(
            result,
            Err(GeneratePixelBufferCancelableError::Cancelled(_))
        ));
    }

    #[test]
    fn test_cancelable_matches_plain_when_not_cancelled() {
        let input: Vec<u8> = (0..12).collect();

        let plain = generate_pixel_buffer(input.clone(), &StubColourMapSuccess {}, canvas(4, 3))
            .unwrap();
        let cancelable = generate_pixel_buffer_cancelable(
            input,
            &StubColourMapSuccess {},
            canvas(4, 3),
            &NeverCancel,
        )
        .unwrap();

        assert_eq!(plain, cancelable);
    }

    #[test]
    fn test_cancelable_error_display() {
        let cancelled = GeneratePixelBufferCancelableError::Cancelled(Cancelled);
        let colour = GeneratePixelBufferCancelableError::ColourMap("StubColourMapError".into());

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(colour.to_string(), "colour map error: StubColourMapError");
    }
}
