use crate::error::{FixtureError, Result};
use image::Rgb;
use std::str::FromStr;

/// Represents an opaque 8-bit RGB color on the canvas.
///
/// Named constructors follow the CSS/X11 color names used by common imaging
/// toolkits, so `Color::gray()` is `#808080` rather than a light gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its red, green and blue components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self> {
        let hex = value.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(FixtureError::InvalidLayout(format!(
                "invalid color: {value}"
            )));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| FixtureError::InvalidLayout(format!("invalid color: {value}")))
        };

        Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Black color (0, 0, 0).
    pub const fn black() -> Self {
        Color::rgb(0, 0, 0)
    }

    /// White color (255, 255, 255).
    pub const fn white() -> Self {
        Color::rgb(255, 255, 255)
    }

    /// Gray color (128, 128, 128).
    pub const fn gray() -> Self {
        Color::rgb(128, 128, 128)
    }

    /// Red color (255, 0, 0).
    pub const fn red() -> Self {
        Color::rgb(255, 0, 0)
    }

    /// Blue color (0, 0, 255).
    pub const fn blue() -> Self {
        Color::rgb(0, 0, 255)
    }
}

impl FromStr for Color {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb([color.r, color.g, color.b])
    }
}

impl From<Rgb<u8>> for Color {
    fn from(pixel: Rgb<u8>) -> Self {
        Color::rgb(pixel.0[0], pixel.0[1], pixel.0[2])
    }
}
