//! Text rasterization
//!
//! Text is anchored at the top-left of its line box: the ascender line sits on
//! the given `y`. Scalable glyphs are alpha-blended onto the canvas; bitmap
//! glyphs are stamped pixel by pixel.

use crate::fonts::{builtin, FontSet, FontTier, Typeface};
use crate::geometry::Point;
use crate::graphics::Color;
use image::RgbImage;
use rusttype::{point, Font, Scale};

/// Convert an em size in pixels to the rusttype scale (ascent to descent).
fn em_scale(font: &Font<'static>, em_px: f32) -> Scale {
    let units_per_em = font.units_per_em() as f32;
    let v_metrics = font.v_metrics_unscaled();
    let extent = v_metrics.ascent - v_metrics.descent;
    if units_per_em <= 0.0 || extent <= 0.0 {
        return Scale::uniform(em_px);
    }
    Scale::uniform(em_px * extent / units_per_em)
}

/// Draw `text` with the `tier` face of `fonts`, top-left anchored at `origin`.
pub fn draw_text(
    image: &mut RgbImage,
    fonts: &FontSet,
    tier: FontTier,
    origin: Point,
    color: Color,
    text: &str,
) {
    match fonts.typeface() {
        Typeface::Scalable(font) => {
            draw_scalable(image, font, fonts.size(tier), origin, color, text)
        }
        Typeface::Builtin => draw_bitmap(image, origin, color, text),
    }
}

/// Mix one channel of `src` over `dst` with coverage `alpha` in `0.0..=1.0`.
fn blend(src: u8, dst: u8, alpha: f32) -> u8 {
    (src as f32 * alpha + dst as f32 * (1.0 - alpha))
        .round()
        .clamp(0.0, 255.0) as u8
}

fn draw_scalable(
    image: &mut RgbImage,
    font: &Font<'static>,
    em_px: f32,
    origin: Point,
    color: Color,
    text: &str,
) {
    let scale = em_scale(font, em_px);
    let v_metrics = font.v_metrics(scale);
    let baseline = point(origin.x as f32, origin.y as f32 + v_metrics.ascent);
    let (width, height) = image.dimensions();

    for glyph in font.layout(text, scale, baseline) {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let px = gx as i32 + bb.min.x;
            let py = gy as i32 + bb.min.y;
            if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                return;
            }
            let alpha = coverage.clamp(0.0, 1.0);
            if alpha <= 0.0 {
                return;
            }
            let dst = image.get_pixel_mut(px as u32, py as u32);
            dst.0[0] = blend(color.r, dst.0[0], alpha);
            dst.0[1] = blend(color.g, dst.0[1], alpha);
            dst.0[2] = blend(color.b, dst.0[2], alpha);
        });
    }
}

fn draw_bitmap(image: &mut RgbImage, origin: Point, color: Color, text: &str) {
    let (width, height) = image.dimensions();
    let mut caret_x = origin.x;

    for ch in text.chars() {
        if let Some(rows) = builtin::glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..builtin::CELL_SIZE as i32 {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    let px = caret_x + col;
                    let py = origin.y + row as i32;
                    if px < 0 || py < 0 || px as u32 >= width || py as u32 >= height {
                        continue;
                    }
                    image.put_pixel(px as u32, py as u32, color.into());
                }
            }
        }
        caret_x += builtin::CELL_SIZE as i32;
    }
}
