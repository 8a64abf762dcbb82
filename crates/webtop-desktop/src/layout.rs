//! Window placement clamping
//!
//! Pure functions that keep window geometry usable for a given viewport.
//! "Viewport" here is always the area available to windows, i.e. the screen
//! minus the taskbar.

use serde::{Deserialize, Serialize};
use crate::math::{Point, Size};

/// Height reserved for the taskbar at the bottom of the screen
pub const TASKBAR_HEIGHT: f32 = 64.0;
/// Default minimum window width
pub const WINDOW_MIN_WIDTH: f32 = 200.0;
/// Default minimum window height
pub const WINDOW_MIN_HEIGHT: f32 = 150.0;
/// Margin kept between a window and the right/bottom viewport edges
pub const WINDOW_EDGE_GAP: f32 = 20.0;
/// Default minimum window size
pub const DEFAULT_MIN_SIZE: Size = Size::new(WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT);

/// Fraction of a window that must stay on screen while dragging
const MIN_VISIBLE_RATIO: f32 = 0.3;
/// Upper bound of the vertical sliver kept visible while dragging
const MIN_VISIBLE_HEIGHT: f32 = 100.0;

/// Position and size of a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub position: Point,
    pub size: Size,
}

impl Placement {
    /// Create a new placement
    #[inline]
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

/// Clamp a window's size and position with the default edge gap
pub fn clamp_placement(size: Size, position: Point, viewport: Size, min_size: Size) -> Placement {
    clamp_placement_with_gap(size, position, viewport, min_size, WINDOW_EDGE_GAP)
}

/// Clamp a window's size and position into `viewport`
///
/// Size is clamped first; the position range is derived from the clamped
/// size. The result never goes below `min_size`, so a viewport smaller than
/// the minimum yields the minimum size pinned at the origin rather than a
/// failure. Clamping an already clamped placement returns it unchanged.
pub fn clamp_placement_with_gap(
    size: Size,
    position: Point,
    viewport: Size,
    min_size: Size,
    edge_gap: f32,
) -> Placement {
    let size = clamp_size(size, viewport, min_size, edge_gap);

    let visible_width = min_visible_width(size.width, min_size.width);
    let max_x = (viewport.width - size.width - edge_gap).max(0.0);
    let max_y = (viewport.height - size.height - edge_gap).max(0.0);

    let x = position.x.max(-size.width + visible_width).min(max_x);
    let y = position.y.max(0.0).min(max_y);

    Placement::new(Point::new(x, y), size)
}

/// Clamp each dimension into `[min, max(min, viewport - gap)]`
pub fn clamp_size(size: Size, viewport: Size, min_size: Size, edge_gap: f32) -> Size {
    let max_width = min_size.width.max(viewport.width - edge_gap);
    let max_height = min_size.height.max(viewport.height - edge_gap);

    Size::new(
        size.width.max(min_size.width).min(max_width),
        size.height.max(min_size.height).min(max_height),
    )
}

/// Horizontal sliver of a window that must remain on screen
#[inline]
pub fn min_visible_width(width: f32, min_width: f32) -> f32 {
    min_width.min(width * MIN_VISIBLE_RATIO)
}

/// Size for a newly opened window: the default, shrunk to fit, never grown
pub fn fit_size(default: Size, viewport: Size, min_size: Size, edge_gap: f32) -> Size {
    let fit_width = (viewport.width - edge_gap).max(min_size.width);
    let fit_height = (viewport.height - edge_gap).max(min_size.height);

    Size::new(
        default.width.min(fit_width).max(min_size.width),
        default.height.min(fit_height).max(min_size.height),
    )
}

/// Geometry of a maximized window
pub fn maximized_placement(viewport: Size, min_size: Size) -> Placement {
    Placement::new(Point::ZERO, viewport.max(min_size))
}

/// Constrain a dragged window's position
///
/// Looser than [`clamp_placement`]: the window may hang past the right and
/// bottom edges as long as a sliver stays visible. The top edge is a hard
/// floor.
pub fn constrain_drag(position: Point, viewport: Size, size: Size, min_width: f32) -> Point {
    let visible_width = min_visible_width(size.width, min_width);
    let visible_height = MIN_VISIBLE_HEIGHT.min(size.height * MIN_VISIBLE_RATIO);

    let x = position
        .x
        .max(-size.width + visible_width)
        .min(viewport.width - visible_width);
    let y = position.y.min(viewport.height - visible_height).max(0.0);

    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 768.0 - TASKBAR_HEIGHT);

    fn viewports() -> Vec<Size> {
        vec![
            Size::new(1920.0, 1016.0),
            VIEWPORT,
            Size::new(768.0, 960.0),
            Size::new(375.0, 603.0),
            Size::new(150.0, 100.0),
            Size::new(0.0, 0.0),
        ]
    }

    fn requests() -> Vec<(Size, Point)> {
        vec![
            (Size::new(600.0, 750.0), Point::new(120.0, 80.0)),
            (Size::new(50.0, 40.0), Point::new(-900.0, -300.0)),
            (Size::new(5000.0, 5000.0), Point::new(4000.0, 4000.0)),
            (Size::new(320.0, 460.0), Point::new(250.0, 250.0)),
            (Size::new(300.0, 200.0), Point::new(-250.0, 10.0)),
        ]
    }

    #[test]
    fn test_clamp_respects_size_bounds() {
        for viewport in viewports() {
            for (size, position) in requests() {
                let placed = clamp_placement(size, position, viewport, DEFAULT_MIN_SIZE);
                let max_w = WINDOW_MIN_WIDTH.max(viewport.width - WINDOW_EDGE_GAP);
                let max_h = WINDOW_MIN_HEIGHT.max(viewport.height - WINDOW_EDGE_GAP);

                assert!(placed.size.width >= WINDOW_MIN_WIDTH);
                assert!(placed.size.height >= WINDOW_MIN_HEIGHT);
                assert!(placed.size.width <= max_w);
                assert!(placed.size.height <= max_h);
                assert!(placed.position.y >= 0.0);
            }
        }
    }

    #[test]
    fn test_clamp_is_idempotent() {
        for viewport in viewports() {
            for (size, position) in requests() {
                let once = clamp_placement(size, position, viewport, DEFAULT_MIN_SIZE);
                let twice = clamp_placement(once.size, once.position, viewport, DEFAULT_MIN_SIZE);
                assert_eq!(once, twice);
            }
        }
    }

    #[test]
    fn test_clamp_keeps_horizontal_sliver() {
        let placed = clamp_placement(
            Size::new(300.0, 200.0),
            Point::new(-1000.0, 10.0),
            VIEWPORT,
            DEFAULT_MIN_SIZE,
        );
        // min_visible = min(200, 90) = 90
        assert!((placed.position.x - (-210.0)).abs() < 0.001);
    }

    #[test]
    fn test_clamp_right_and_bottom_edges() {
        let placed = clamp_placement(
            Size::new(300.0, 200.0),
            Point::new(2000.0, 2000.0),
            VIEWPORT,
            DEFAULT_MIN_SIZE,
        );
        assert!((placed.position.x - 704.0).abs() < 0.001);
        assert!((placed.position.y - 484.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_degenerate_viewport() {
        let placed = clamp_placement(
            Size::new(600.0, 750.0),
            Point::new(50.0, 50.0),
            Size::new(120.0, 90.0),
            DEFAULT_MIN_SIZE,
        );
        assert_eq!(placed.size, DEFAULT_MIN_SIZE);
        assert_eq!(placed.position, Point::ZERO);
    }

    #[test]
    fn test_clamp_honors_larger_app_minimum() {
        let min = Size::new(400.0, 300.0);
        let placed = clamp_placement(Size::new(100.0, 100.0), Point::new(10.0, 10.0), VIEWPORT, min);
        assert_eq!(placed.size, min);
    }

    #[test]
    fn test_fit_size_shrinks_but_never_grows() {
        let shrunk = fit_size(Size::new(600.0, 750.0), VIEWPORT, DEFAULT_MIN_SIZE, WINDOW_EDGE_GAP);
        assert!((shrunk.width - 600.0).abs() < 0.001);
        assert!((shrunk.height - 684.0).abs() < 0.001);

        let kept = fit_size(Size::new(320.0, 460.0), VIEWPORT, DEFAULT_MIN_SIZE, WINDOW_EDGE_GAP);
        assert_eq!(kept, Size::new(320.0, 460.0));

        let floored = fit_size(Size::new(600.0, 750.0), Size::new(100.0, 100.0), DEFAULT_MIN_SIZE, WINDOW_EDGE_GAP);
        assert_eq!(floored, DEFAULT_MIN_SIZE);
    }

    #[test]
    fn test_maximized_placement() {
        let max = maximized_placement(VIEWPORT, DEFAULT_MIN_SIZE);
        assert_eq!(max.position, Point::ZERO);
        assert_eq!(max.size, VIEWPORT);

        let tiny = maximized_placement(Size::new(100.0, 80.0), DEFAULT_MIN_SIZE);
        assert_eq!(tiny.size, DEFAULT_MIN_SIZE);
    }

    #[test]
    fn test_constrain_drag_right_edge() {
        // 300x200 window dragged 600px right from x=500
        let point = constrain_drag(Point::new(1100.0, 500.0), VIEWPORT, Size::new(300.0, 200.0), WINDOW_MIN_WIDTH);
        assert!((point.x - 934.0).abs() < 0.001);
        assert!((point.y - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_constrain_drag_left_and_top() {
        let point = constrain_drag(Point::new(-500.0, -40.0), VIEWPORT, Size::new(300.0, 200.0), WINDOW_MIN_WIDTH);
        assert!((point.x - (-210.0)).abs() < 0.001);
        assert!((point.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_constrain_drag_bottom() {
        let point = constrain_drag(Point::new(10.0, 1000.0), VIEWPORT, Size::new(300.0, 200.0), WINDOW_MIN_WIDTH);
        // 704 - min(100, 60)
        assert!((point.y - 644.0).abs() < 0.001);
    }
}
