//! Pixel geometry for the raster canvas
//!
//! Coordinates grow right and down from the top-left corner of the canvas.
//! Rectangles are corner-inclusive: a rectangle from `(0, 0)` to `(9, 9)`
//! covers a 10x10 block of pixels.

/// A point on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// X coordinate in pixels
    pub x: i32,
    /// Y coordinate in pixels
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin point (0, 0)
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }
}

/// A rectangle defined by its top-left and bottom-right corners, both inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    /// Top-left corner
    pub top_left: Point,
    /// Bottom-right corner
    pub bottom_right: Point,
}

impl Rectangle {
    /// Create a rectangle from two corners, normalizing their order
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            top_left: Point::new(a.x.min(b.x), a.y.min(b.y)),
            bottom_right: Point::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rectangle from corner coordinates `(x0, y0)` and `(x1, y1)`
    pub fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Width in pixels, counting both edges
    pub fn width(&self) -> u32 {
        self.bottom_right.x.abs_diff(self.top_left.x).saturating_add(1)
    }

    /// Height in pixels, counting both edges
    pub fn height(&self) -> u32 {
        self.bottom_right.y.abs_diff(self.top_left.y).saturating_add(1)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.top_left.x
            && point.x <= self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y <= self.bottom_right.y
    }

    /// Shrink every edge by `amount` pixels, or `None` once the rectangle collapses
    pub fn inset(&self, amount: i32) -> Option<Self> {
        let x0 = self.top_left.x.saturating_add(amount);
        let y0 = self.top_left.y.saturating_add(amount);
        let x1 = self.bottom_right.x.saturating_sub(amount);
        let y1 = self.bottom_right.y.saturating_sub(amount);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Self::from_corners(x0, y0, x1, y1))
    }

    /// Intersect with a `width` x `height` canvas, or `None` when fully outside
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let x0 = self.top_left.x.max(0);
        let y0 = self.top_left.y.max(0);
        let x1 = self.bottom_right.x.min(width as i32 - 1);
        let y1 = self.bottom_right.y.min(height as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Self::from_corners(x0, y0, x1, y1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point() {
        let p = Point::new(10, 20);
        assert_eq!(p.x, 10);
        assert_eq!(p.y, 20);
        assert_eq!(Point::origin(), Point::new(0, 0));
    }

    #[test]
    fn test_rectangle_is_corner_inclusive() {
        let rect = Rectangle::from_corners(400, 80, 580, 260);
        assert_eq!(rect.width(), 181);
        assert_eq!(rect.height(), 181);
        assert!(rect.contains(Point::new(580, 260)));
        assert!(!rect.contains(Point::new(581, 260)));
    }

    #[test]
    fn test_rectangle_normalizes_corners() {
        let rect = Rectangle::from_corners(50, 60, 10, 20);
        assert_eq!(rect.top_left, Point::new(10, 20));
        assert_eq!(rect.bottom_right, Point::new(50, 60));
    }

    #[test]
    fn test_extreme_corners_do_not_overflow() {
        let rect = Rectangle::from_corners(i32::MIN, 0, i32::MAX, 10);
        assert_eq!(rect.width(), u32::MAX);
        assert_eq!(rect.height(), 11);
        assert_eq!(rect.inset(i32::MAX), None);
        assert_eq!(
            rect.inset(1),
            Some(Rectangle::from_corners(i32::MIN + 1, 1, i32::MAX - 1, 9))
        );
    }

    #[test]
    fn test_inset_collapses() {
        let rect = Rectangle::from_corners(0, 0, 3, 3);
        assert_eq!(rect.inset(1), Some(Rectangle::from_corners(1, 1, 2, 2)));
        assert_eq!(rect.inset(2), None);
    }

    #[test]
    fn test_clip_to_canvas() {
        // Header band drawn one pixel past the right edge
        let header = Rectangle::from_corners(0, 0, 600, 60);
        let clipped = header.clip_to(600, 400).unwrap();
        assert_eq!(clipped.width(), 600);
        assert_eq!(clipped.height(), 61);

        let outside = Rectangle::from_corners(700, 0, 800, 10);
        assert_eq!(outside.clip_to(600, 400), None);
    }
}
