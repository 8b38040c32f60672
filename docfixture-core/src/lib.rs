//! # docfixture
//!
//! Deterministic synthetic identity-document images for exercising document
//! extraction pipelines.
//!
//! ## Features
//!
//! - **Document templates**: national ID (Aadhaar), tax ID (PAN), passport and
//!   visa layouts, each backed by a literal field record
//! - **Pure rendering**: ordered draw directives painted onto an RGB canvas,
//!   byte-for-byte reproducible for a given font resolution
//! - **Injected fonts**: any [`FontSource`] can supply the scalable face; an
//!   unavailable font degrades to a built-in bitmap face instead of failing
//! - **Expectation reports**: the values an extractor should read back, built
//!   from the same record that was drawn
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docfixture::{DocumentKind, FixtureGenerator, GeneratorConfig, Result};
//!
//! # fn main() -> Result<()> {
//! let generator = FixtureGenerator::new(GeneratorConfig::default());
//!
//! for fixture in generator.generate_all(&DocumentKind::ALL)? {
//!     println!("Created {} with {}", fixture.file_name(), fixture.kind.description());
//!     print!("{}", fixture.report);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering without touching disk
//!
//! ```rust
//! use docfixture::{BuiltinFontSource, DocumentKind, FixtureGenerator, GeneratorConfig};
//!
//! # fn main() -> docfixture::Result<()> {
//! let generator =
//!     FixtureGenerator::with_font_source(GeneratorConfig::default(), &BuiltinFontSource);
//! let rendered = generator.render(DocumentKind::NationalId)?;
//!
//! assert_eq!(rendered.image.dimensions(), (600, 400));
//! assert_eq!(rendered.report.value("Full Name"), Some("KATRINA UUENI"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`canvas`] - Draw directives and the pure renderer
//! - [`documents`] - Per-document records and layouts
//! - [`encoder`] - JPEG/PNG encoding and writing
//! - [`fonts`] - Font sources, resolution and fallback
//! - [`generator`] - The record, render, write, report pipeline
//! - [`report`] - Expected-extraction reports

pub mod canvas;
pub mod documents;
pub mod encoder;
pub mod error;
pub mod fonts;
pub mod generator;
pub mod geometry;
pub mod graphics;
pub mod record;
pub mod report;
pub mod text;

pub use canvas::{Canvas, DrawDirective};
pub use documents::{DocumentKind, DocumentTemplate};
pub use encoder::{encode, write_image, EncodeOptions, OutputFormat, DEFAULT_JPEG_QUALITY};
pub use error::{FixtureError, Result};
pub use fonts::{
    BuiltinFontSource, FileFontSource, FontResolution, FontResolver, FontSet, FontSource,
    FontTier, MemoryFontSource, TypeScale, Typeface, DEFAULT_FONT_PATH,
};
pub use generator::{
    fixtures_to_json, FixtureGenerator, GeneratedFixture, GeneratorConfig, RenderedFixture,
};
pub use geometry::{Point, Rectangle};
pub use graphics::Color;
pub use record::FieldRecord;
pub use report::{ExpectationReport, ExpectedField};

/// Current version of docfixture
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_reexports_compose() {
        let mut canvas = Canvas::new(10, 10, Color::white()).unwrap();
        canvas.fill_rect(Rectangle::from_corners(0, 0, 9, 9), Color::black());
        let image = canvas.render(&FontSet::builtin());
        assert!(image.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
