//! Plain-text PPM (P3) output.
//!
//! Layout is `P3\n<width> <height>\n255\n` followed by one line per image
//! row, top row first, holding space-separated `r g b` triplets.

use std::fmt;
use std::io::Write;

use crate::{Color, ImageBuffer};
use ember_math::Interval;

/// An 8-bit RGB triplet as written to the PPM body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Quantize a linear color, optionally applying gamma 2.
    ///
    /// Components are clamped to [0, 0.999] before scaling by 256 so 1.0
    /// maps to 255 and every output value gets an equal share of the range.
    pub fn from_color(color: Color, gamma: bool) -> Self {
        let intensity = Interval::new(0.0, 0.999);
        let encode = |c: f32| {
            let c = if gamma { linear_to_gamma(c) } else { c };
            (256.0 * intensity.clamp(c)) as u8
        };
        Self::new(encode(color.x), encode(color.y), encode(color.z))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Serialize `image` as a P3 PPM.
pub fn write_ppm<W: Write>(image: &ImageBuffer, writer: &mut W, gamma: bool) -> std::io::Result<()> {
    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for row in image.rows() {
        let line = row
            .iter()
            .map(|color| Rgb8::from_color(*color, gamma).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }

    Ok(())
}
