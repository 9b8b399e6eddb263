//! Plain 2D geometry shared by the store and the presentation layer.
//!
//! Store positions live in "design space": a 430 x 932 portrait canvas
//! that frontends scale to their own surface. Hit-testing rectangles
//! live in whatever space the frontend renders in.

use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset this point by another, treated as a vector.
    #[must_use]
    pub fn offset(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }
}

/// An axis-aligned rectangle: top-left corner plus size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether a point lies inside, edges inclusive.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_inclusive_edges() {
        let rect = Rect::new(10.0, 20.0, 53.0, 53.0);

        assert!(rect.contains(Point::new(10.0, 20.0)));
        assert!(rect.contains(Point::new(63.0, 73.0)));
        assert!(rect.contains(Point::new(30.0, 40.0)));
        assert!(!rect.contains(Point::new(9.9, 40.0)));
        assert!(!rect.contains(Point::new(30.0, 73.1)));
    }

    #[test]
    fn test_point_offset() {
        let p = Point::new(1.0, 2.0).offset(Point::new(-3.0, 4.0));
        assert_eq!(p, Point::new(-2.0, 6.0));
    }
}
