//! Image encoding and writing
//!
//! Encoding is pure and deterministic: the same surface and options always
//! yield the same bytes. Writing is a separate step so callers can hash or
//! compare encoded output without touching the filesystem.

use crate::error::{FixtureError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbImage};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Default JPEG quality for fixtures
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossy JPEG
    Jpeg,
    /// Lossless PNG
    Png,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: OutputFormat,
    /// JPEG quality 1..=100; ignored for PNG
    pub quality: u8,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl EncodeOptions {
    pub fn jpeg(quality: u8) -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality,
        }
    }

    pub fn png() -> Self {
        Self {
            format: OutputFormat::Png,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.format == OutputFormat::Jpeg && !(1..=100).contains(&self.quality) {
            return Err(FixtureError::InvalidOptions(format!(
                "JPEG quality {} outside 1..=100",
                self.quality
            )));
        }
        Ok(())
    }
}

/// Encode `image` to bytes.
pub fn encode(image: &RgbImage, options: EncodeOptions) -> Result<Vec<u8>> {
    options.validate()?;

    let mut buffer = Vec::new();
    let (width, height) = image.dimensions();
    match options.format {
        OutputFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut buffer, options.quality).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        OutputFormat::Png => {
            PngEncoder::new(&mut buffer).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }
    Ok(buffer)
}

/// Encode `image` and write it to `path`, replacing any existing file.
pub fn write_image(path: impl AsRef<Path>, image: &RgbImage, options: EncodeOptions) -> Result<u64> {
    let path = path.as_ref();
    let bytes = encode(image, options)?;
    std::fs::write(path, &bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), format = ?options.format, "wrote image");
    Ok(bytes.len() as u64)
}
