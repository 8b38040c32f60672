use crate::error::{FixtureError, Result};
use crate::fonts::{FontSet, FontTier};
use crate::geometry::{Point, Rectangle};
use crate::graphics::{self, Color};
use crate::text;
use image::RgbImage;

/// One primitive painting operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawDirective {
    /// Solid rectangle
    FillRect { rect: Rectangle, color: Color },
    /// Rectangle outline; the stroke grows inward from the rectangle edge
    StrokeRect {
        rect: Rectangle,
        color: Color,
        width: u32,
    },
    /// Single line of text, top-left anchored
    Text {
        origin: Point,
        content: String,
        tier: FontTier,
        color: Color,
    },
}

/// A fixed-size raster layout: background plus an ordered list of directives.
///
/// Directives are painted in insertion order, so later ones cover earlier
/// ones. Rendering is pure; the same canvas and font set always produce the
/// same pixels.
///
/// # Example
///
/// ```rust
/// use docfixture::{Canvas, Color, FontSet, FontTier, Rectangle};
///
/// let mut canvas = Canvas::new(200, 100, Color::white())?;
/// canvas
///     .fill_rect(Rectangle::from_corners(0, 0, 200, 20), Color::blue())
///     .text((10, 30), "Name: KATRINA UUENI", FontTier::Medium, Color::black());
///
/// let image = canvas.render(&FontSet::builtin());
/// assert_eq!(image.dimensions(), (200, 100));
/// # Ok::<(), docfixture::FixtureError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Color,
    directives: Vec<DrawDirective>,
}

impl Canvas {
    /// Creates an empty canvas; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(FixtureError::InvalidLayout(format!(
                "canvas must be non-empty, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            background,
            directives: Vec::new(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn directives(&self) -> &[DrawDirective] {
        &self.directives
    }

    pub fn push(&mut self, directive: DrawDirective) -> &mut Self {
        self.directives.push(directive);
        self
    }

    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) -> &mut Self {
        self.push(DrawDirective::FillRect { rect, color })
    }

    pub fn stroke_rect(&mut self, rect: Rectangle, color: Color, width: u32) -> &mut Self {
        self.push(DrawDirective::StrokeRect { rect, color, width })
    }

    pub fn text(
        &mut self,
        origin: (i32, i32),
        content: impl Into<String>,
        tier: FontTier,
        color: Color,
    ) -> &mut Self {
        self.push(DrawDirective::Text {
            origin: Point::new(origin.0, origin.1),
            content: content.into(),
            tier,
            color,
        })
    }

    /// Text directives in paint order as `(origin, content)` pairs.
    pub fn text_lines(&self) -> impl Iterator<Item = (Point, &str)> {
        self.directives.iter().filter_map(|directive| match directive {
            DrawDirective::Text {
                origin, content, ..
            } => Some((*origin, content.as_str())),
            _ => None,
        })
    }

    /// Paints every directive onto a fresh surface.
    pub fn render(&self, fonts: &FontSet) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, self.background.into());

        for directive in &self.directives {
            match directive {
                DrawDirective::FillRect { rect, color } => {
                    graphics::fill_rect(&mut image, rect, *color);
                }
                DrawDirective::StrokeRect { rect, color, width } => {
                    graphics::stroke_rect(&mut image, rect, *color, *width);
                }
                DrawDirective::Text {
                    origin,
                    content,
                    tier,
                    color,
                } => {
                    text::draw_text(&mut image, fonts, *tier, *origin, *color, content);
                }
            }
        }

        image
    }
}
