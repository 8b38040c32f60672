//! Built-in 8x8 bitmap face
//!
//! Used whenever no scalable font can be resolved. Every size tier renders at
//! the same fixed cell size.

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

/// Width and height of one glyph cell in pixels.
pub const CELL_SIZE: u32 = 8;

/// Bitmap rows for `ch`, top row first, least significant bit leftmost.
///
/// Characters outside Basic Latin and Latin-1 have no glyph.
pub fn glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_and_latin1_glyphs() {
        assert!(glyph('A').is_some());
        assert!(glyph('<').is_some());
        assert!(glyph('ü').is_some());
        assert!(glyph('ä').is_some());
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(' '), Some([0u8; 8]));
    }
}
