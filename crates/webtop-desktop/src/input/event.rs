//! Pointer events fed to window views

use crate::math::Point;
use crate::window::WindowRegion;
use super::PointerId;

/// Pointer input in viewport coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Press on a region of the view's window
    Down {
        target: WindowRegion,
        point: Point,
        /// Pointer to capture for the interaction; `None` skips capture
        pointer_id: Option<PointerId>,
    },
    Move { point: Point },
    Up,
    Cancel,
    TouchEnd,
    TouchCancel,
    DoubleClick { target: WindowRegion },
}

impl PointerEvent {
    /// Events that end any drag or resize in progress
    #[inline]
    pub fn ends_interaction(&self) -> bool {
        matches!(
            self,
            PointerEvent::Up | PointerEvent::Cancel | PointerEvent::TouchEnd | PointerEvent::TouchCancel
        )
    }
}
