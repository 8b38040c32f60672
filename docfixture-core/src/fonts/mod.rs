//! Font resolution for fixture rendering
//!
//! A [`FontResolver`] turns an injected [`FontSource`] into a [`Typeface`].
//! Resolution never fails: a missing or unreadable font yields the built-in
//! bitmap face, and the outcome is recorded as a [`FontResolution`].

pub mod builtin;
pub mod loader;
pub mod source;

pub use loader::{FontData, FontFormat, FontLoader};
pub use source::{
    BuiltinFontSource, FileFontSource, FontSource, MemoryFontSource, DEFAULT_FONT_PATH,
};

use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Text size tier used by draw directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontTier {
    Large,
    Medium,
    Small,
}

/// Pixel em sizes for the three tiers of one document type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
}

impl TypeScale {
    pub const fn new(large: f32, medium: f32, small: f32) -> Self {
        Self {
            large,
            medium,
            small,
        }
    }

    /// Em size in pixels for `tier`
    pub fn size(&self, tier: FontTier) -> f32 {
        match tier {
            FontTier::Large => self.large,
            FontTier::Medium => self.medium,
            FontTier::Small => self.small,
        }
    }
}

/// The face glyphs are rasterized with
#[derive(Clone)]
pub enum Typeface {
    /// Scalable outline font
    Scalable(rusttype::Font<'static>),
    /// 8x8 bitmap fallback
    Builtin,
}

impl Typeface {
    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// Bind this face to a document's type scale
    pub fn with_scale(&self, scale: TypeScale) -> FontSet {
        FontSet {
            typeface: self.clone(),
            scale,
        }
    }
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Scalable(font) => f
                .debug_struct("Scalable")
                .field("glyph_count", &font.glyph_count())
                .finish(),
            Typeface::Builtin => f.write_str("Builtin"),
        }
    }
}

/// How the typeface for a run was obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FontResolution {
    /// The preferred font loaded
    Scalable { origin: String },
    /// The preferred font was unavailable
    Fallback { reason: String },
}

impl FontResolution {
    pub fn is_fallback(&self) -> bool {
        matches!(self, FontResolution::Fallback { .. })
    }
}

/// A typeface bound to concrete tier sizes, ready for drawing
#[derive(Debug, Clone)]
pub struct FontSet {
    typeface: Typeface,
    scale: TypeScale,
}

impl FontSet {
    /// Bitmap-only font set; tier sizes are irrelevant for the built-in face
    pub fn builtin() -> Self {
        Typeface::Builtin.with_scale(TypeScale::new(8.0, 8.0, 8.0))
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    pub fn scale(&self) -> TypeScale {
        self.scale
    }

    /// Em size in pixels for `tier`
    pub fn size(&self, tier: FontTier) -> f32 {
        self.scale.size(tier)
    }
}

/// Resolves a [`FontSource`] with graceful degradation
pub struct FontResolver;

impl FontResolver {
    pub fn resolve(source: &dyn FontSource) -> (Typeface, FontResolution) {
        let origin = source.describe();
        match source.load().and_then(FontLoader::parse) {
            Ok(font) => {
                debug!(%origin, glyphs = font.glyph_count(), "resolved scalable font");
                (Typeface::Scalable(font), FontResolution::Scalable { origin })
            }
            Err(err) => {
                debug!(%origin, error = %err, "falling back to built-in bitmap font");
                (
                    Typeface::Builtin,
                    FontResolution::Fallback {
                        reason: format!("{origin}: {err}"),
                    },
                )
            }
        }
    }
}
