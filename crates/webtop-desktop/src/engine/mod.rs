//! Desktop engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `windows`: Window lifecycle, taskbar and launcher actions
//! - `input`: Pointer event routing to window views
//! - `animation`: Per-frame commit of pending drags and resizes

mod animation;
mod input;
mod windows;

use std::collections::HashMap;
use crate::config::DesktopConfig;
use crate::input::{NoCapture, PointerCapture, WindowView};
use crate::math::Size;
use crate::snapshot::DesktopSnapshot;
use crate::window::{WindowId, WindowManager};

/// Builds the pointer capture used by a new window view
pub type CaptureFactory = Box<dyn Fn(WindowId) -> Box<dyn PointerCapture>>;

/// Desktop engine coordinating all desktop components
///
/// This is the main entry point for desktop operations, managing:
/// - Window manager (window lifecycle, focus, z-order)
/// - One input view per open window (drag/resize state machine)
/// - Launcher surfaces (desktop icons, start menu, taskbar)
pub struct DesktopEngine {
    /// Window manager; mutated only through engine methods so views stay in step
    pub(crate) windows: WindowManager,
    /// Input view per window
    pub(crate) views: HashMap<WindowId, WindowView>,
    /// Window that received the last press and owns the pointer stream
    pub(crate) active: Option<WindowId>,
    capture_factory: CaptureFactory,
}

impl Default for DesktopEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopEngine {
    /// Create a new desktop engine with the default config
    pub fn new() -> Self {
        Self::from_manager(WindowManager::new())
    }

    /// Create an engine for the given config and screen size
    pub fn with_config(config: DesktopConfig, screen: Size) -> Self {
        Self::from_manager(WindowManager::with_config(config, screen))
    }

    /// Wrap an existing manager
    pub fn from_manager(windows: WindowManager) -> Self {
        Self {
            windows,
            views: HashMap::new(),
            active: None,
            capture_factory: Box::new(|_: WindowId| -> Box<dyn PointerCapture> { Box::new(NoCapture) }),
        }
    }

    /// Replace how pointer capture is obtained for new views
    pub fn with_capture(mut self, factory: impl Fn(WindowId) -> Box<dyn PointerCapture> + 'static) -> Self {
        self.capture_factory = Box::new(factory);
        self
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: f32, height: f32) {
        self.windows.set_viewport(Size::new(width, height));
    }

    /// Read access to the window manager
    #[inline]
    pub fn windows(&self) -> &WindowManager {
        &self.windows
    }

    /// Counter bumped by every state change
    #[inline]
    pub fn revision(&self) -> u64 {
        self.windows.revision()
    }

    /// Capture everything needed to render the desktop
    pub fn snapshot(&self) -> DesktopSnapshot {
        DesktopSnapshot::capture(&self.windows)
    }

    /// View for a window, created on first use
    pub(crate) fn view_mut(&mut self, id: WindowId) -> &mut WindowView {
        let factory = &self.capture_factory;
        self.views.entry(id).or_insert_with(|| WindowView::new(id, factory(id)))
    }

    /// Drop views whose window no longer exists, releasing their capture
    pub(crate) fn prune_views(&mut self) {
        let windows = &self.windows;
        self.views.retain(|id, _| windows.get(*id).is_some());
        if self.active.is_some_and(|id| !self.views.contains_key(&id)) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apps::AppKind;
    use crate::breakpoint::Breakpoint;
    use crate::window::FixedOffset;

    pub(super) fn create_test_engine() -> DesktopEngine {
        let windows = WindowManager::with_config(DesktopConfig::default(), Size::new(1280.0, 800.0))
            .with_offsets(FixedOffset(0.0));
        DesktopEngine::from_manager(windows)
    }

    #[test]
    fn test_resize_updates_breakpoint() {
        let mut engine = create_test_engine();
        assert_eq!(engine.snapshot().breakpoint, Breakpoint::Desktop);

        engine.resize(800.0, 600.0);
        assert_eq!(engine.snapshot().breakpoint, Breakpoint::Tablet);

        engine.resize(375.0, 667.0);
        assert_eq!(engine.snapshot().breakpoint, Breakpoint::Mobile);
    }

    #[test]
    fn test_snapshot_tracks_revision() {
        let mut engine = create_test_engine();
        let before = engine.revision();
        engine.launch_app("skills");

        let snapshot = engine.snapshot();
        assert!(snapshot.revision > before);
        assert_eq!(snapshot.windows.len(), 1);
        assert_eq!(snapshot.windows[0].app(), AppKind::Skills);
    }

    #[test]
    fn test_prune_views_drops_closed_windows() {
        let mut engine = create_test_engine();
        let id = engine.launch_app("notepad").unwrap();
        assert!(engine.views.contains_key(&id));

        engine.windows.close(id);
        engine.prune_views();
        assert!(engine.views.is_empty());
    }
}
