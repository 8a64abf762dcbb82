//! Core geometry types for the desktop
//!
//! Plain value types for positions, sizes and hit-test rectangles.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
