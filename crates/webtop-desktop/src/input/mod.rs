//! Input routing module
//!
//! Provides the per-window drag/resize state machine and the pointer
//! capture seam it drives.

mod capture;
mod event;
mod interaction;
mod result;
mod view;

pub use capture::{CaptureError, NoCapture, PointerCapture, PointerId};
pub use event::PointerEvent;
pub use interaction::Interaction;
pub use result::InputResult;
pub use view::WindowView;

use std::fmt;
use std::str::FromStr;
use crate::layout::Placement;
use crate::math::{Point, Size};

/// Corner a resize is anchored from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}

impl ResizeDirection {
    /// All corners, in hit-test order
    pub const ALL: [ResizeDirection; 4] = [
        ResizeDirection::NorthWest,
        ResizeDirection::NorthEast,
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
    ];

    /// Short id used by the DOM layer ("nw", "ne", "se", "sw")
    pub fn id(self) -> &'static str {
        match self {
            ResizeDirection::NorthWest => "nw",
            ResizeDirection::NorthEast => "ne",
            ResizeDirection::SouthEast => "se",
            ResizeDirection::SouthWest => "sw",
        }
    }

    /// Dragging this corner moves the left edge
    #[inline]
    pub fn moves_west_edge(self) -> bool {
        matches!(self, ResizeDirection::NorthWest | ResizeDirection::SouthWest)
    }

    /// Dragging this corner moves the top edge
    #[inline]
    pub fn moves_north_edge(self) -> bool {
        matches!(self, ResizeDirection::NorthWest | ResizeDirection::NorthEast)
    }

    /// Get CSS cursor style for this corner
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeDirection::NorthWest | ResizeDirection::SouthEast => "nwse-resize",
            ResizeDirection::NorthEast | ResizeDirection::SouthWest => "nesw-resize",
        }
    }
}

impl fmt::Display for ResizeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing an unknown resize direction
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize direction '{0}'")]
pub struct ParseDirectionError(pub String);

impl FromStr for ResizeDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nw" => Ok(ResizeDirection::NorthWest),
            "ne" => Ok(ResizeDirection::NorthEast),
            "se" => Ok(ResizeDirection::SouthEast),
            "sw" => Ok(ResizeDirection::SouthWest),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// Calculate new position and size after resize operation
///
/// `delta` is the pointer travel since the press. Width and height are
/// floored at `min`; west/north corners shift the position so the opposite
/// corner stays put. Viewport clamping happens later in the manager.
pub fn calculate_resize(
    direction: ResizeDirection,
    start: Placement,
    delta: Point,
    min: Size,
) -> Placement {
    let start_size = start.size;

    let width = if direction.moves_west_edge() {
        start_size.width - delta.x
    } else {
        start_size.width + delta.x
    }
    .max(min.width);

    let height = if direction.moves_north_edge() {
        start_size.height - delta.y
    } else {
        start_size.height + delta.y
    }
    .max(min.height);

    let mut position = start.position;
    if direction.moves_west_edge() {
        position.x = start.position.x + start_size.width - width;
    }
    if direction.moves_north_edge() {
        position.y = start.position.y + start_size.height - height;
    }

    Placement::new(position, Size::new(width, height))
}
