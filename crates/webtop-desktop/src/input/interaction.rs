//! Drag/resize interaction state

use crate::layout::Placement;
use crate::math::Point;
use super::{PointerId, ResizeDirection};

/// Current interaction of a single window view
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Interaction {
    /// No pointer interaction in progress
    #[default]
    Idle,
    /// Moving the window by its title bar
    Dragging {
        /// Offset from window origin to cursor
        offset: Point,
        /// Last position handed to the manager
        last_committed: Point,
        /// Captured pointer, if the host supplied one
        pointer_id: Option<PointerId>,
    },
    /// Resizing the window from a corner
    Resizing {
        /// Which corner handle
        direction: ResizeDirection,
        /// Pointer position at press
        start_pointer: Point,
        /// Window placement at press
        start: Placement,
        /// Captured pointer, if the host supplied one
        pointer_id: Option<PointerId>,
    },
}

impl Interaction {
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Interaction::Idle)
    }

    /// Check if this is a window move operation
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Interaction::Dragging { .. })
    }

    /// Check if this is a window resize operation
    #[inline]
    pub fn is_resizing(&self) -> bool {
        matches!(self, Interaction::Resizing { .. })
    }

    /// Pointer captured for this interaction
    pub fn pointer_id(&self) -> Option<PointerId> {
        match self {
            Interaction::Idle => None,
            Interaction::Dragging { pointer_id, .. } | Interaction::Resizing { pointer_id, .. } => *pointer_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;

    #[test]
    fn test_idle_state() {
        let state = Interaction::default();
        assert!(state.is_idle());
        assert!(!state.is_dragging());
        assert!(state.pointer_id().is_none());
    }

    #[test]
    fn test_dragging_state() {
        let state = Interaction::Dragging {
            offset: Point::new(10.0, 20.0),
            last_committed: Point::new(100.0, 100.0),
            pointer_id: Some(3),
        };

        assert!(state.is_dragging());
        assert!(!state.is_resizing());
        assert_eq!(state.pointer_id(), Some(3));
    }

    #[test]
    fn test_resizing_state() {
        let state = Interaction::Resizing {
            direction: ResizeDirection::SouthEast,
            start_pointer: Point::new(500.0, 400.0),
            start: Placement::new(Point::new(100.0, 100.0), Size::new(400.0, 300.0)),
            pointer_id: None,
        };

        assert!(state.is_resizing());
        assert!(!state.is_idle());
        assert!(state.pointer_id().is_none());
    }
}
