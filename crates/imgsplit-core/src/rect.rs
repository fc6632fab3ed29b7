//! Rect - Axis-aligned rectangle regions
//!
//! Rectangles are the currency of the splitters: every produced region
//! is described by one. Coordinates are unsigned pixel positions; the
//! right and bottom edges are exclusive.

use std::fmt;

/// An axis-aligned rectangle in pixel coordinates.
///
/// Half-open on the right and bottom: a rectangle at `(x, y)` with size
/// `w x h` covers pixels `x..x+w` by `y..y+h`. A small `Copy` type since
/// it is frequently passed around by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a rectangle from two corner points.
    ///
    /// The corners may be given in any order; the result spans both.
    pub fn from_corners(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        let (x, w) = if x1 <= x2 {
            (x1, x2 - x1)
        } else {
            (x2, x1 - x2)
        };
        let (y, h) = if y1 <= y2 {
            (y1, y2 - y1)
        } else {
            (y2, y1 - y2)
        };
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Check if this rectangle contains another
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection of two rectangles
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.w, self.h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.x, 10);
        assert_eq!(r.y, 20);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.area(), 1200);
    }

    #[test]
    fn test_from_corners_any_order() {
        let a = Rect::from_corners(0, 0, 50, 50);
        let b = Rect::from_corners(50, 50, 0, 0);
        assert_eq!(a, b);
        assert_eq!(a, Rect::new(0, 0, 50, 50));
    }

    #[test]
    fn test_is_empty() {
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::new(5, 5, 1, 1).is_empty());
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains_point(10, 10));
        assert!(r.contains_point(19, 19));
        assert!(!r.contains_point(20, 10));
        assert!(!r.contains_point(10, 20));
        assert!(!r.contains_point(9, 10));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0, 0, 100, 100);
        assert!(outer.contains_rect(&Rect::new(0, 0, 100, 100)));
        assert!(outer.contains_rect(&Rect::new(50, 50, 50, 50)));
        assert!(!outer.contains_rect(&Rect::new(50, 50, 51, 50)));
        assert!(!outer.contains_rect(&Rect::new(90, 0, 20, 20)));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(25, 25, 50, 50);
        assert_eq!(a.intersect(&b), Some(Rect::new(25, 25, 25, 25)));

        let c = Rect::new(60, 60, 10, 10);
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_display() {
        let r = Rect::new(3, 4, 10, 20);
        assert_eq!(r.to_string(), "(3, 4) 10x20");
    }
}
