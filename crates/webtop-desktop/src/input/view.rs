//! Per-window input view
//!
//! Turns raw pointer events on one window into manager operations. Moves
//! only record the latest pointer position; the actual commit happens once
//! per animation frame in [`WindowView::on_animation_frame`].

use tracing::{debug, trace};
use crate::layout::constrain_drag;
use crate::math::{Point, Size};
use crate::window::{WindowId, WindowManager, WindowRegion, FRAME_STYLE};
use super::{calculate_resize, Interaction, InputResult, PointerCapture, PointerEvent, PointerId};

/// Input state for a single window
///
/// Holds at most one pending commit. Any captured pointer is released when
/// the interaction ends or the view is dropped.
pub struct WindowView {
    window_id: WindowId,
    interaction: Interaction,
    /// Latest pointer position not yet committed
    pending: Option<Point>,
    capture: Box<dyn PointerCapture>,
}

impl WindowView {
    pub fn new(window_id: WindowId, capture: Box<dyn PointerCapture>) -> Self {
        Self {
            window_id,
            interaction: Interaction::Idle,
            pending: None,
            capture,
        }
    }

    #[inline]
    pub fn window_id(&self) -> WindowId {
        self.window_id
    }

    #[inline]
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Check if a move is waiting for the next animation frame
    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Handle a pointer event aimed at this view's window
    pub fn handle(&mut self, event: PointerEvent, wm: &mut WindowManager) -> InputResult {
        match event {
            PointerEvent::Down { target, point, pointer_id } => self.press(target, point, pointer_id, wm),
            PointerEvent::Move { point } => {
                if self.interaction.is_idle() {
                    return InputResult::Unhandled;
                }
                self.pending = Some(point);
                InputResult::RequestFrame
            }
            PointerEvent::DoubleClick { target: WindowRegion::TitleBar } => {
                if !wm.viewport().is_mobile() {
                    wm.toggle_maximize(self.window_id);
                }
                InputResult::Handled
            }
            PointerEvent::DoubleClick { .. } => InputResult::Unhandled,
            event if event.ends_interaction() => {
                if self.interaction.is_idle() {
                    return InputResult::Unhandled;
                }
                self.end();
                InputResult::Handled
            }
            _ => InputResult::Unhandled,
        }
    }

    /// Commit the pending move, if any
    ///
    /// Returns true if the manager was updated.
    pub fn on_animation_frame(&mut self, wm: &mut WindowManager) -> bool {
        let Some(point) = self.pending.take() else {
            return false;
        };
        let Some(window) = wm.get(self.window_id) else {
            trace!(window_id = self.window_id, "window gone mid-interaction");
            self.end();
            return false;
        };

        let size = window.size();
        let min_size = window.min_size();
        let area = wm.viewport().available();
        let threshold = wm.config().drag_threshold;
        let min_extent = wm.config().resize_min_extent;
        let revision = wm.revision();

        match &mut self.interaction {
            Interaction::Idle => return false,
            Interaction::Dragging { offset, last_committed, .. } => {
                let position = constrain_drag(point - *offset, area, size, min_size.width);
                if !position.moved_beyond(*last_committed, threshold) {
                    return false;
                }
                *last_committed = position;
                wm.update_position(self.window_id, position);
            }
            Interaction::Resizing { direction, start_pointer, start, .. } => {
                // App minimum applies here too, keeping the opposite corner anchored
                let min = Size::new(min_extent, min_extent).max(min_size);
                let placement = calculate_resize(*direction, *start, point - *start_pointer, min);
                wm.update_placement(self.window_id, placement);
            }
        }
        wm.revision() != revision
    }

    /// Abandon any interaction, dropping the pending commit and releasing capture
    pub fn end(&mut self) {
        self.pending = None;
        let finished = std::mem::take(&mut self.interaction);
        if let Some(pointer_id) = finished.pointer_id() {
            if let Err(err) = self.capture.release(pointer_id) {
                debug!(window_id = self.window_id, pointer_id, %err, "pointer release failed");
            }
        }
    }

    fn press(
        &mut self,
        target: WindowRegion,
        point: Point,
        pointer_id: Option<PointerId>,
        wm: &mut WindowManager,
    ) -> InputResult {
        let id = self.window_id;
        self.end();

        match target {
            WindowRegion::CloseButton => wm.close(id),
            WindowRegion::MinimizeButton => wm.toggle_minimize(id),
            WindowRegion::MaximizeButton => {
                if !wm.viewport().is_mobile() {
                    wm.toggle_maximize(id);
                }
            }
            WindowRegion::Content => {
                wm.focus(id);
                let Some(window) = wm.get(id) else {
                    return InputResult::Unhandled;
                };
                let local = point - window.position();
                return InputResult::Forward {
                    window_id: id,
                    local_x: local.x,
                    local_y: local.y - FRAME_STYLE.title_bar_height,
                };
            }
            WindowRegion::TitleBar | WindowRegion::Resize(_) => {
                wm.focus(id);
                let mobile = wm.viewport().is_mobile();
                let Some(window) = wm.get(id) else {
                    return InputResult::Unhandled;
                };
                if mobile || window.is_maximized() {
                    return InputResult::Handled;
                }

                self.interaction = match target {
                    WindowRegion::Resize(direction) => Interaction::Resizing {
                        direction,
                        start_pointer: point,
                        start: window.placement(),
                        pointer_id,
                    },
                    _ => Interaction::Dragging {
                        offset: point - window.position(),
                        last_committed: window.position(),
                        pointer_id,
                    },
                };
                trace!(window_id = id, interaction = ?self.interaction, "interaction started");
                self.acquire(pointer_id);
            }
        }

        InputResult::Handled
    }

    fn acquire(&mut self, pointer_id: Option<PointerId>) {
        let Some(pointer_id) = pointer_id else {
            return;
        };
        if let Err(err) = self.capture.capture(pointer_id) {
            debug!(window_id = self.window_id, pointer_id, %err, "pointer capture failed");
        }
    }
}

impl Drop for WindowView {
    fn drop(&mut self) {
        self.end();
    }
}
