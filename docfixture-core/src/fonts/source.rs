//! Font acquisition capability
//!
//! Rendering never reaches for a host font path directly. A [`FontSource`]
//! is injected instead, and the resolver degrades to the built-in bitmap
//! font when the source cannot produce a usable scalable font.

use super::loader::{FontData, FontLoader};
use crate::error::FixtureError;
use crate::Result;
use std::path::{Path, PathBuf};

/// Preferred host font used when no other source is configured.
pub const DEFAULT_FONT_PATH: &str = "/System/Library/Fonts/Arial.ttf";

/// Something that can hand out raw scalable-font bytes.
pub trait FontSource {
    /// Human-readable origin, used in logs and resolution reports
    fn describe(&self) -> String;

    /// Load the font bytes
    fn load(&self) -> Result<FontData>;
}

/// Reads a TrueType/OpenType file from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFontSource {
    path: PathBuf,
}

impl FileFontSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileFontSource {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_PATH)
    }
}

impl FontSource for FileFontSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<FontData> {
        FontLoader::load_from_file(&self.path)
    }
}

/// Font bytes supplied by the caller (embedded assets, test fonts).
#[derive(Debug, Clone)]
pub struct MemoryFontSource {
    name: String,
    bytes: Vec<u8>,
}

impl MemoryFontSource {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

impl FontSource for MemoryFontSource {
    fn describe(&self) -> String {
        format!("{} ({} bytes in memory)", self.name, self.bytes.len())
    }

    fn load(&self) -> Result<FontData> {
        FontLoader::load_from_bytes(self.bytes.clone())
    }
}

/// Never yields a scalable font; rendering always uses the bitmap face.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontSource;

impl FontSource for BuiltinFontSource {
    fn describe(&self) -> String {
        "built-in bitmap font".to_string()
    }

    fn load(&self) -> Result<FontData> {
        Err(FixtureError::FontError(
            "no scalable font requested".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_source_points_at_host_font() {
        let source = FileFontSource::default();
        assert_eq!(source.path(), Path::new(DEFAULT_FONT_PATH));
        assert_eq!(source.describe(), DEFAULT_FONT_PATH);
    }

    #[test]
    fn test_memory_source_sniffs_format() {
        let source = MemoryFontSource::new("junk", vec![0xDE, 0xAD, 0xBE, 0xEF]);
        assert!(source.load().is_err());
        assert!(source.describe().starts_with("junk"));
    }

    #[test]
    fn test_builtin_source_never_loads() {
        assert!(BuiltinFontSource.load().is_err());
    }
}
