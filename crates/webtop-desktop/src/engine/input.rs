//! Pointer event routing

use crate::input::{InputResult, PointerEvent, PointerId, WindowView};
use crate::math::Point;
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Handle pointer down
    ///
    /// Hit tests the topmost window under the pointer and hands the press to
    /// its view. That view then receives moves and the release.
    pub fn handle_pointer_down(&mut self, x: f32, y: f32, pointer_id: Option<PointerId>) -> InputResult {
        let point = Point::new(x, y);
        let Some((window_id, region)) = self.windows.region_at(point) else {
            return InputResult::Unhandled;
        };

        if let Some(previous) = self.active.replace(window_id) {
            if previous != window_id {
                self.end_view(previous);
            }
        }
        self.dispatch(window_id, PointerEvent::Down { target: region, point, pointer_id })
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        match self.active {
            Some(window_id) => self.dispatch(window_id, PointerEvent::Move { point: Point::new(x, y) }),
            None => InputResult::Unhandled,
        }
    }

    /// Handle pointer up
    pub fn handle_pointer_up(&mut self) -> InputResult {
        self.release_active(PointerEvent::Up)
    }

    /// Handle pointer cancel
    pub fn handle_pointer_cancel(&mut self) -> InputResult {
        self.release_active(PointerEvent::Cancel)
    }

    /// Handle touch end
    pub fn handle_touch_end(&mut self) -> InputResult {
        self.release_active(PointerEvent::TouchEnd)
    }

    /// Handle touch cancel
    pub fn handle_touch_cancel(&mut self) -> InputResult {
        self.release_active(PointerEvent::TouchCancel)
    }

    /// Handle double click; on a title bar this toggles maximize
    pub fn handle_double_click(&mut self, x: f32, y: f32) -> InputResult {
        match self.windows.region_at(Point::new(x, y)) {
            Some((window_id, target)) => self.dispatch(window_id, PointerEvent::DoubleClick { target }),
            None => InputResult::Unhandled,
        }
    }

    /// CSS cursor for the region under the pointer
    pub fn cursor_at(&self, x: f32, y: f32) -> &'static str {
        self.windows
            .region_at(Point::new(x, y))
            .map(|(_, region)| region.cursor())
            .unwrap_or("default")
    }

    /// Deliver an event straight to one window's view
    pub fn dispatch(&mut self, window_id: WindowId, event: PointerEvent) -> InputResult {
        if self.windows.get(window_id).is_none() {
            return InputResult::Unhandled;
        }

        let view = {
            let factory = &self.capture_factory;
            self.views
                .entry(window_id)
                .or_insert_with(|| WindowView::new(window_id, factory(window_id)))
        };
        let result = view.handle(event, &mut self.windows);
        self.prune_views();
        result
    }

    fn release_active(&mut self, event: PointerEvent) -> InputResult {
        match self.active.take() {
            Some(window_id) => self.dispatch(window_id, event),
            None => InputResult::Unhandled,
        }
    }

    fn end_view(&mut self, window_id: WindowId) {
        if let Some(view) = self.views.get_mut(&window_id) {
            view.end();
        }
    }
}
