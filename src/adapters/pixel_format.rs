//! Pixel format conversion for presentation adapters.

use crate::core::data::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
use std::error::Error;
use std::fmt;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "rgba target holds {} bytes but the frame needs {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Expands an RGB frame into an RGBA surface with opaque alpha.
pub fn copy_pixel_buffer_to_rgba(
    buffer: &PixelBuffer,
    dst: &mut [u8],
) -> Result<(), PixelFormatError> {
    let src = buffer.buffer();
    let expected = src.len() / BYTES_PER_PIXEL * RGBA_BYTES_PER_PIXEL;

    if dst.len() != expected {
        return Err(PixelFormatError::LengthMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (src_pixel, dst_pixel) in src
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(dst.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        dst_pixel[..BYTES_PER_PIXEL].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::canvas_size::CanvasSize;

    fn buffer(width: u32, height: u32, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer::from_data(CanvasSize::new(width, height).unwrap(), data).unwrap()
    }

    #[test]
    fn test_copy_known_values() {
        let frame = buffer(2, 2, vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
        let mut dst = vec![0; 16];

        copy_pixel_buffer_to_rgba(&frame, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255]
        );
    }

    #[test]
    fn test_copy_overwrites_existing_alpha() {
        let frame = buffer(1, 1, vec![128, 64, 32]);
        let mut dst = vec![9; 4];

        copy_pixel_buffer_to_rgba(&frame, &mut dst).unwrap();

        assert_eq!(dst, vec![128, 64, 32, 255]);
    }

    #[test]
    fn test_copy_rejects_wrong_target_size() {
        let frame = buffer(2, 1, vec![1, 2, 3, 4, 5, 6]);
        let mut dst = vec![0; 4];

        assert_eq!(
            copy_pixel_buffer_to_rgba(&frame, &mut dst),
            Err(PixelFormatError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        );
        assert_eq!(dst, vec![0; 4]);
    }
}
