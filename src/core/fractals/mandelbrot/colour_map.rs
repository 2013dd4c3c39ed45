use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_outcome::EscapeOutcome;
use std::error::Error;

const PALETTE_SIZE: i64 = 256 * 256 * 256;

/// Palette entry for an integer index, spreading `[0, max_iterations]` over
/// the full 24-bit range. Indices outside that range wrap around.
///
/// The packed value is read as red in the high byte, blue in the middle byte
/// and green in the low byte.
#[must_use]
pub fn palette_colour(index: i64, max_iterations: u32) -> Colour {
    let max = f64::from(max_iterations.max(1));
    let scaled = (index as f64 / max * PALETTE_SIZE as f64).round() as i64;
    let n = scaled.rem_euclid(PALETTE_SIZE);
    let rem = n % 65536;

    Colour {
        r: (n / 65536) as u8,
        g: (rem % 256) as u8,
        b: (rem / 256) as u8,
    }
}

/// Blends the palette entries either side of a fractional index.
#[must_use]
pub fn interpolate(smooth_index: f64, max_iterations: u32) -> Colour {
    let k = smooth_index.floor();
    let f = smooth_index - k;
    let k = k as i64;

    let a = palette_colour(k, max_iterations);
    let b = palette_colour(k.saturating_add(1), max_iterations);

    Colour {
        r: blend(a.r, b.r, f),
        g: blend(a.g, b.g, f),
        b: blend(a.b, b.b, f),
    }
}

fn blend(a: u8, b: u8, f: f64) -> u8 {
    (f64::from(a) * (1.0 - f) + f64::from(b) * f)
        .clamp(0.0, 255.0) as u8
}

/// Colours escaped points from their smooth index, bounded points black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothPaletteColourMap {
    max_iterations: u32,
}

impl SmoothPaletteColourMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour(&self, outcome: EscapeOutcome) -> Colour {
        if outcome.escaped {
            interpolate(outcome.smooth_index, self.max_iterations)
        } else {
            Colour::BLACK
        }
    }
}

impl ColourMap<EscapeOutcome> for SmoothPaletteColourMap {
    fn map(&self, value: EscapeOutcome) -> Result<Colour, Box<dyn Error>> {
        Ok(self.colour(value))
    }
}
