//! Per-frame commit of pending pointer moves

use super::DesktopEngine;

impl DesktopEngine {
    /// Run one animation frame
    ///
    /// Each view commits at most its latest pending move. Returns true if
    /// any window changed.
    pub fn animation_frame(&mut self) -> bool {
        let mut changed = false;
        for view in self.views.values_mut() {
            if view.has_pending_frame() {
                changed |= view.on_animation_frame(&mut self.windows);
            }
        }
        self.prune_views();
        changed
    }

    /// Check if any view is waiting for a frame
    pub fn needs_frame(&self) -> bool {
        self.views.values().any(|view| view.has_pending_frame())
    }
}
