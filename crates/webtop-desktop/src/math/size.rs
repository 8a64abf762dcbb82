//! 2D size type for window dimensions

use serde::{Deserialize, Serialize};

/// Width and height in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise maximum
    #[inline]
    pub fn max(self, other: Size) -> Self {
        Self::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Size) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Check that both dimensions are at least those of `min`
    #[inline]
    pub fn covers(self, min: Size) -> bool {
        self.width >= min.width && self.height >= min.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(10.0, 0.0).is_empty());
        assert!(!Size::new(10.0, 5.0).is_empty());
    }

    #[test]
    fn test_size_min_max() {
        let a = Size::new(50.0, 500.0);
        let b = Size::new(100.0, 300.0);

        let hi = a.max(b);
        assert!((hi.width - 100.0).abs() < 0.001);
        assert!((hi.height - 500.0).abs() < 0.001);

        let lo = a.min(b);
        assert!((lo.width - 50.0).abs() < 0.001);
        assert!((lo.height - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_size_covers() {
        let min = Size::new(200.0, 150.0);
        assert!(Size::new(200.0, 150.0).covers(min));
        assert!(!Size::new(199.0, 400.0).covers(min));
    }
}
