//! Font loading utilities

use crate::error::FixtureError;
use crate::Result;
use std::path::Path;

/// Font format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFormat {
    /// TrueType font format
    TrueType,
    /// OpenType font format with CFF outlines
    OpenType,
    /// TrueType collection; the first face is used
    Collection,
}

impl FontFormat {
    /// Detect font format from raw data
    pub fn detect(data: &[u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(FixtureError::FontError("Font data too small".into()));
        }

        match &data[0..4] {
            // TTF magic: 0x00010000
            [0x00, 0x01, 0x00, 0x00] => Ok(FontFormat::TrueType),
            // TTF with 'true' tag (legacy Apple fonts)
            [0x74, 0x72, 0x75, 0x65] => Ok(FontFormat::TrueType),
            // OTF magic: "OTTO"
            [0x4F, 0x54, 0x54, 0x4F] => Ok(FontFormat::OpenType),
            // "ttcf"
            [0x74, 0x74, 0x63, 0x66] => Ok(FontFormat::Collection),
            _ => Err(FixtureError::FontError("Unknown font format".into())),
        }
    }
}

/// Raw font data container
#[derive(Debug, Clone)]
pub struct FontData {
    /// Raw font bytes
    pub bytes: Vec<u8>,
    /// Detected font format
    pub format: FontFormat,
}

/// Font loader for reading font files
pub struct FontLoader;

impl FontLoader {
    /// Load font data from file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<FontData> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(bytes)
    }

    /// Load font data from bytes
    pub fn load_from_bytes(bytes: Vec<u8>) -> Result<FontData> {
        let format = FontFormat::detect(&bytes)?;
        Ok(FontData { bytes, format })
    }

    /// Parse font data into a rasterizable font
    pub fn parse(data: FontData) -> Result<rusttype::Font<'static>> {
        // Table directory follows the 12-byte offset table
        if data.bytes.len() < 12 {
            return Err(FixtureError::FontError("Font file too small".into()));
        }

        rusttype::Font::try_from_vec(data.bytes).ok_or_else(|| {
            FixtureError::FontError(format!("Could not parse {:?} font tables", data.format))
        })
    }
}
