//! 2D point type for window positions and pointer offsets

use serde::{Deserialize, Serialize};

/// Pixel offset from the viewport origin
///
/// Components may be negative: a window can be partially dragged off the
/// left edge of the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Viewport origin
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// True when either axis differs from `other` by more than `threshold`
    #[inline]
    pub fn moved_beyond(self, other: Point, threshold: f32) -> bool {
        (self.x - other.x).abs() > threshold || (self.y - other.y).abs() > threshold
    }
}

impl std::ops::Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_operations() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let diff = b - a;
        assert!((diff.x - 2.0).abs() < 0.001);
        assert!((diff.y - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_moved_beyond_threshold() {
        let origin = Point::new(100.0, 100.0);
        assert!(!origin.moved_beyond(Point::new(100.4, 99.6), 0.5));
        assert!(!origin.moved_beyond(Point::new(100.5, 100.0), 0.5));
        assert!(origin.moved_beyond(Point::new(100.6, 100.0), 0.5));
        assert!(origin.moved_beyond(Point::new(100.0, 98.0), 0.5));
    }
}
