//! Fixture generation pipeline: record, render, encode+write, report.

use crate::documents::DocumentKind;
use crate::encoder::{self, EncodeOptions};
use crate::error::Result;
use crate::fonts::{
    FileFontSource, FontResolution, FontResolver, FontSource, Typeface, DEFAULT_FONT_PATH,
};
use crate::record::FieldRecord;
use crate::report::ExpectationReport;
use image::RgbImage;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Settings for a generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Directory fixture files are written into
    pub output_dir: PathBuf,
    /// Preferred scalable font
    pub font_path: PathBuf,
    pub encode: EncodeOptions,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            encode: EncodeOptions::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = path.into();
        self
    }

    pub fn with_encode(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }

    /// Full path the fixture for `kind` is written to
    pub fn output_path(&self, kind: DocumentKind) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", kind.file_stem(), self.encode.format.extension()))
    }
}

/// A rendered fixture that has not been written anywhere
#[derive(Debug, Clone)]
pub struct RenderedFixture {
    pub kind: DocumentKind,
    pub record: FieldRecord,
    pub image: RgbImage,
    pub report: ExpectationReport,
}

/// Outcome of writing one fixture
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFixture {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes: u64,
    /// The record that was drawn
    pub record: FieldRecord,
    pub report: ExpectationReport,
}

impl GeneratedFixture {
    /// File name as shown in console banners
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Pretty-printed JSON array describing `fixtures`: paths, sizes, the drawn
/// records and their expectation reports.
pub fn fixtures_to_json(fixtures: &[GeneratedFixture]) -> Result<String> {
    Ok(serde_json::to_string_pretty(fixtures)?)
}

/// Renders and writes fixtures with one resolved typeface.
pub struct FixtureGenerator {
    config: GeneratorConfig,
    typeface: Typeface,
    resolution: FontResolution,
}

impl FixtureGenerator {
    /// Resolve the configured font path, falling back to the bitmap face.
    pub fn new(config: GeneratorConfig) -> Self {
        let source = FileFontSource::new(config.font_path.clone());
        Self::with_font_source(config, &source)
    }

    /// Use an injected font source instead of the configured path.
    pub fn with_font_source(config: GeneratorConfig, source: &dyn FontSource) -> Self {
        let (typeface, resolution) = FontResolver::resolve(source);
        Self {
            config,
            typeface,
            resolution,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn font_resolution(&self) -> &FontResolution {
        &self.resolution
    }

    /// Build the record, lay it out and paint it. No I/O.
    pub fn render(&self, kind: DocumentKind) -> Result<RenderedFixture> {
        let template = kind.template();
        let record = template.record();
        let canvas = template.layout(&record)?;
        let fonts = self.typeface.with_scale(template.type_scale());

        debug!(
            %kind,
            directives = canvas.directives().len(),
            builtin_font = self.typeface.is_builtin(),
            "rendering fixture"
        );
        let image = canvas.render(&fonts);
        let report = template.expectations(&record)?;

        Ok(RenderedFixture {
            kind,
            record,
            image,
            report,
        })
    }

    /// Render `kind` and write it into the output directory.
    pub fn generate(&self, kind: DocumentKind) -> Result<GeneratedFixture> {
        let rendered = self.render(kind)?;
        let path = self.config.output_path(kind);
        let bytes = encoder::write_image(&path, &rendered.image, self.config.encode)?;
        let (width, height) = rendered.image.dimensions();

        info!(%kind, path = %path.display(), width, height, bytes, "generated fixture");
        Ok(GeneratedFixture {
            kind,
            path,
            width,
            height,
            bytes,
            record: rendered.record,
            report: rendered.report,
        })
    }

    /// Generate each kind in order; the first failure aborts the run.
    pub fn generate_all(&self, kinds: &[DocumentKind]) -> Result<Vec<GeneratedFixture>> {
        kinds.iter().map(|kind| self.generate(*kind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::OutputFormat;
    use crate::fonts::BuiltinFontSource;
    use image::Rgb;
    use std::path::Path;
    use tempfile::TempDir;

    fn builtin_generator(dir: &Path, encode: EncodeOptions) -> FixtureGenerator {
        let config = GeneratorConfig::default()
            .with_output_dir(dir)
            .with_encode(encode);
        FixtureGenerator::with_font_source(config, &BuiltinFontSource)
    }

    #[test]
    fn test_default_config_matches_script_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.font_path, PathBuf::from("/System/Library/Fonts/Arial.ttf"));
        assert_eq!(config.encode.format, OutputFormat::Jpeg);
        assert_eq!(config.encode.quality, 95);
        assert_eq!(
            config.output_path(DocumentKind::NationalId),
            PathBuf::from("./aadhaar.jpg")
        );
    }

    #[test]
    fn test_output_path_follows_format() {
        let config = GeneratorConfig::default()
            .with_output_dir("/tmp/fixtures")
            .with_encode(EncodeOptions::png());
        assert_eq!(
            config.output_path(DocumentKind::Visa),
            PathBuf::from("/tmp/fixtures/visa.png")
        );
    }

    #[test]
    fn test_render_national_id_pixels() {
        let dir = TempDir::new().unwrap();
        let generator = builtin_generator(dir.path(), EncodeOptions::png());
        let rendered = generator.render(DocumentKind::NationalId).unwrap();
        let image = &rendered.image;

        assert_eq!(image.dimensions(), (600, 400));
        // Header band
        assert_eq!(image.get_pixel(5, 5), &Rgb([0xFF, 0x6B, 0x35]));
        assert_eq!(image.get_pixel(599, 60), &Rgb([0xFF, 0x6B, 0x35]));
        assert_eq!(image.get_pixel(599, 61), &Rgb([255, 255, 255]));
        // QR placeholder: two-pixel outline, white inside
        assert_eq!(image.get_pixel(400, 150), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(401, 150), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(402, 150), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(580, 260), &Rgb([0, 0, 0]));
        // Untouched corner
        assert_eq!(image.get_pixel(595, 395), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let generator = builtin_generator(dir.path(), EncodeOptions::default());
        let fixture = generator.generate(DocumentKind::TaxId).unwrap();

        assert_eq!(fixture.path, dir.path().join("pan.jpg"));
        assert_eq!(fixture.file_name(), "pan.jpg");
        assert_eq!((fixture.width, fixture.height), (600, 400));
        assert!(fixture.path.exists());
        assert_eq!(std::fs::metadata(&fixture.path).unwrap().len(), fixture.bytes);
    }

    #[test]
    fn test_generate_all_in_order() {
        let dir = TempDir::new().unwrap();
        let generator = builtin_generator(dir.path(), EncodeOptions::default());
        let fixtures = generator.generate_all(&DocumentKind::ALL).unwrap();

        let names: Vec<_> = fixtures.iter().map(|f| f.file_name()).collect();
        assert_eq!(names, vec!["aadhaar.jpg", "pan.jpg", "passport.jpg", "visa.jpg"]);
    }

    #[test]
    fn test_fixtures_to_json_carries_record_and_report() {
        let dir = TempDir::new().unwrap();
        let generator = builtin_generator(dir.path(), EncodeOptions::default());
        let fixture = generator.generate(DocumentKind::NationalId).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fixtures_to_json(&[fixture]).unwrap()).unwrap();
        let entry = &json[0];
        assert_eq!(entry["kind"], "national-id");
        assert_eq!(entry["width"], 600);
        assert_eq!(entry["record"]["aadhaar_number"], "1234 5678 9012");
        assert_eq!(entry["report"]["entries"][0]["label"], "Full Name");
        assert_eq!(entry["report"]["entries"][0]["value"], "KATRINA UUENI");
    }

    #[test]
    fn test_generate_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let generator = builtin_generator(&dir.path().join("nope"), EncodeOptions::default());
        assert!(generator.generate(DocumentKind::Passport).is_err());
    }
}
