//! Raster shape primitives
//!
//! Thin wrappers over `imageproc` drawing that apply the corner-inclusive
//! rectangle semantics of [`Rectangle`] and inward-growing strokes. Every
//! shape is clipped to the image before it reaches `imageproc`.

mod color;

pub use color::Color;

use crate::geometry::Rectangle;
use image::RgbImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

fn to_imageproc(rect: &Rectangle) -> Rect {
    Rect::at(rect.top_left.x, rect.top_left.y).of_size(rect.width(), rect.height())
}

/// Fill `rect` with `color`, clipped to the image bounds.
pub fn fill_rect(image: &mut RgbImage, rect: &Rectangle, color: Color) {
    if let Some(clipped) = rect.clip_to(image.width(), image.height()) {
        draw_filled_rect_mut(image, to_imageproc(&clipped), color.into());
    }
}

/// Outline `rect` with a stroke `width` pixels thick growing inward.
///
/// A zero width draws nothing. The stroke is painted as up to four clipped
/// bands, so rectangles reaching far outside the image are cheap.
pub fn stroke_rect(image: &mut RgbImage, rect: &Rectangle, color: Color, width: u32) {
    if width == 0 {
        return;
    }
    let amount = i32::try_from(width).unwrap_or(i32::MAX);
    let Some(inner) = rect.inset(amount) else {
        fill_rect(image, rect, color);
        return;
    };

    let (outer_tl, outer_br) = (rect.top_left, rect.bottom_right);
    let (inner_tl, inner_br) = (inner.top_left, inner.bottom_right);
    let bands = [
        // top and bottom span the full width
        Rectangle::from_corners(outer_tl.x, outer_tl.y, outer_br.x, inner_tl.y - 1),
        Rectangle::from_corners(outer_tl.x, inner_br.y + 1, outer_br.x, outer_br.y),
        // left and right cover the rows between them
        Rectangle::from_corners(outer_tl.x, inner_tl.y, inner_tl.x - 1, inner_br.y),
        Rectangle::from_corners(inner_br.x + 1, inner_tl.y, outer_br.x, inner_br.y),
    ];
    for band in &bands {
        fill_rect(image, band, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_fill_rect_covers_both_corners() {
        let mut image = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        fill_rect(&mut image, &Rectangle::from_corners(2, 2, 5, 5), Color::black());

        assert_eq!(image.get_pixel(2, 2), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(5, 5), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(6, 6), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_fill_rect_clips_overflow() {
        let mut image = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        fill_rect(&mut image, &Rectangle::from_corners(0, 0, 10, 3), Color::red());

        assert_eq!(image.get_pixel(9, 3), &Rgb([255, 0, 0]));
        assert_eq!(image.get_pixel(9, 4), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_stroke_rect_grows_inward() {
        let mut image = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        stroke_rect(&mut image, &Rectangle::from_corners(2, 2, 12, 12), Color::blue(), 2);

        assert_eq!(image.get_pixel(2, 2), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(3, 3), &Rgb([0, 0, 255]));
        assert_eq!(image.get_pixel(4, 4), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(12, 7), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_stroke_wider_than_rect_fills_it() {
        let mut image = RgbImage::from_pixel(10, 10, Rgb([255, 255, 255]));
        stroke_rect(&mut image, &Rectangle::from_corners(0, 0, 3, 3), Color::black(), 10);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.get_pixel(x, y), &Rgb([0, 0, 0]));
            }
        }
    }

    #[test]
    fn test_zero_width_stroke_draws_nothing() {
        let mut image = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        stroke_rect(&mut image, &Rectangle::from_corners(2, 2, 10, 10), Color::black(), 0);

        assert!(image.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn test_stroke_with_extreme_corners_is_clipped() {
        let mut image = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        let rect = Rectangle::from_corners(i32::MIN, 0, i32::MAX, 10);
        stroke_rect(&mut image, &rect, Color::black(), 1);

        // Only the top and bottom edges cross the image
        assert_eq!(image.get_pixel(0, 0), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(19, 10), &Rgb([0, 0, 0]));
        assert_eq!(image.get_pixel(0, 5), &Rgb([255, 255, 255]));
        assert_eq!(image.get_pixel(19, 11), &Rgb([255, 255, 255]));

        stroke_rect(&mut image, &rect, Color::red(), u32::MAX);
        assert_eq!(image.get_pixel(0, 5), &Rgb([255, 0, 0]));
    }
}
