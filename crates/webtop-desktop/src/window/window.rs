//! Window record

use serde::Serialize;
use crate::apps::AppKind;
use crate::input::ResizeDirection;
use crate::layout::{maximized_placement, Placement};
use crate::math::{Point, Rect, Size};
use super::{WindowId, FRAME_STYLE};

/// A window on the desktop
///
/// Fields are only written by [`WindowManager`](super::WindowManager)
/// operations; everything else reads through the accessors.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub(crate) id: WindowId,
    #[serde(rename = "appId")]
    pub(crate) app: AppKind,
    pub(crate) title: String,
    pub(crate) position: Point,
    pub(crate) size: Size,
    #[serde(skip)]
    pub(crate) min_size: Size,
    pub(crate) is_minimized: bool,
    pub(crate) is_maximized: bool,
    pub(crate) z_index: u32,
    pub(crate) is_focused: bool,
    /// Placement to return to when leaving maximized; set iff maximized
    #[serde(skip)]
    pub(crate) restore: Option<Placement>,
}

impl Window {
    #[inline]
    pub fn id(&self) -> WindowId {
        self.id
    }

    #[inline]
    pub fn app(&self) -> AppKind {
        self.app
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.is_minimized
    }

    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    #[inline]
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Placement saved when the window was maximized
    #[inline]
    pub fn restore_placement(&self) -> Option<Placement> {
        self.restore
    }

    /// Focused and on screen; drives the taskbar highlight
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_focused && !self.is_minimized
    }

    #[inline]
    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.size)
    }

    /// Get the window's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the title bar rectangle
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Header button rectangle, counting slots from the right edge
    fn button_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Get the close button rectangle
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    /// Get the maximize button rectangle
    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    /// Get the minimize button rectangle; it takes the maximize slot when
    /// that button is hidden
    pub fn minimize_button_rect(&self, maximize_shown: bool) -> Rect {
        self.button_rect(if maximize_shown { 2 } else { 1 })
    }

    /// Get the corner handle rectangle for a resize direction
    pub fn resize_handle_rect(&self, direction: ResizeDirection) -> Rect {
        let rect = self.rect();
        let x = if direction.moves_west_edge() { rect.x } else { rect.right() };
        let y = if direction.moves_north_edge() { rect.y } else { rect.bottom() };
        Rect::centered_square(Point::new(x, y), FRAME_STYLE.resize_handle_size)
    }

    /// Write a placement, reporting whether anything changed
    pub(crate) fn apply(&mut self, placement: Placement) -> bool {
        if self.placement() == placement {
            return false;
        }
        self.position = placement.position;
        self.size = placement.size;
        true
    }

    /// Fill `area`, saving the current placement first if not yet maximized
    pub(crate) fn enter_maximized(&mut self, area: Size) {
        if !self.is_maximized {
            self.restore = Some(self.placement());
            self.is_maximized = true;
        }
        self.apply(maximized_placement(area, self.min_size));
    }

    /// Return to the saved placement
    pub(crate) fn leave_maximized(&mut self) {
        self.is_maximized = false;
        if let Some(restore) = self.restore.take() {
            self.apply(restore);
        }
    }
}
