//! Window manager for lifecycle, focus, and z-order

use tracing::{debug, trace};
use crate::apps::{AppKind, AppRegistry};
use crate::breakpoint::Breakpoint;
use crate::config::DesktopConfig;
use crate::layout::{self, Placement};
use crate::math::{Point, Size};
use crate::viewport::Viewport;
use crate::input::ResizeDirection;
use super::{EntropyOffsets, OffsetSource, Window, WindowId, WindowRegion};

/// Authoritative collection of open windows
///
/// Every operation is synchronous and silently ignores ids it does not know.
/// Operations that change state bump [`revision`](Self::revision) so
/// subscribers can tell when to re-render.
pub struct WindowManager {
    /// Open windows in creation order
    windows: Vec<Window>,
    registry: AppRegistry,
    config: DesktopConfig,
    viewport: Viewport,
    offsets: Box<dyn OffsetSource>,
    /// Next window ID
    next_id: u64,
    /// Next z-index value
    next_z: u32,
    revision: u64,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowManager {
    /// Create a window manager with the default config and a 1920x1080 screen
    pub fn new() -> Self {
        Self::with_config(DesktopConfig::default(), Size::new(1920.0, 1080.0))
    }

    /// Create a window manager for the given config and screen size
    pub fn with_config(config: DesktopConfig, screen: Size) -> Self {
        let viewport = Viewport::new(screen, config.taskbar_height, &config.breakpoints);
        Self {
            windows: Vec::new(),
            registry: AppRegistry::builtin(),
            next_z: config.first_z_index,
            config,
            viewport,
            offsets: Box::new(EntropyOffsets),
            next_id: 1,
            revision: 0,
        }
    }

    /// Replace the spawn offset source
    pub fn with_offsets(mut self, offsets: impl OffsetSource + 'static) -> Self {
        self.offsets = Box::new(offsets);
        self
    }

    /// Replace the application table
    pub fn with_registry(mut self, registry: AppRegistry) -> Self {
        self.registry = registry;
        self
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open an application by string id
    ///
    /// Returns `None` for ids the registry does not know.
    pub fn open_app(&mut self, app_id: &str) -> Option<WindowId> {
        match self.registry.lookup(app_id) {
            Some(entry) => self.open(entry.kind),
            None => {
                debug!(app_id, "ignoring open of unknown app");
                None
            }
        }
    }

    /// Open an application, reusing its window if one exists
    ///
    /// An existing visible window is focused; a minimized one is restored.
    /// Otherwise a new window is created, focused and stacked on top.
    pub fn open(&mut self, app: AppKind) -> Option<WindowId> {
        if let Some(existing) = self.find_by_app(app) {
            let (id, minimized) = (existing.id, existing.is_minimized);
            if minimized {
                self.toggle_minimize(id);
            } else {
                self.focus(id);
            }
            return Some(id);
        }

        let Some(entry) = self.registry.get(app) else {
            debug!(%app, "app missing from registry");
            return None;
        };

        let area = self.viewport.available();
        let min_size = entry.min_size();
        let edge_gap = self.config.edge_gap;
        let size = layout::fit_size(entry.default_size, area, min_size, edge_gap);
        let spawn = Point::new(self.spawn_offset(), self.spawn_offset());
        let placement = layout::clamp_placement_with_gap(size, spawn, area, min_size, edge_gap);

        let id = self.next_id;
        self.next_id += 1;
        let z_index = self.allocate_z();

        let mut window = Window {
            id,
            app,
            title: entry.title.to_string(),
            position: placement.position,
            size: placement.size,
            min_size,
            is_minimized: false,
            is_maximized: false,
            z_index,
            is_focused: true,
            restore: None,
        };
        if self.viewport.is_mobile() {
            window.enter_maximized(area);
        }

        for other in &mut self.windows {
            other.is_focused = false;
        }
        debug!(id, %app, x = window.position.x, y = window.position.y, "window opened");
        self.windows.push(window);
        self.touch();

        Some(id)
    }

    /// Close a window
    ///
    /// Focus is not handed to another window.
    pub fn close(&mut self, id: WindowId) {
        let before = self.windows.len();
        self.windows.retain(|w| w.id != id);
        if self.windows.len() == before {
            trace!(id, "close of unknown window ignored");
            return;
        }
        debug!(id, "window closed");
        self.touch();
    }

    // =========================================================================
    // Focus and stacking
    // =========================================================================

    /// Focus a window and raise it to the top
    pub fn focus(&mut self, id: WindowId) {
        if self.get(id).is_none() {
            trace!(id, "focus of unknown window ignored");
            return;
        }

        let z_index = self.allocate_z();
        for window in &mut self.windows {
            if window.id == id {
                window.z_index = z_index;
                window.is_focused = true;
            } else {
                window.is_focused = false;
            }
        }
        self.touch();
    }

    /// Minimize a visible window or restore a minimized one
    ///
    /// Minimizing drops focus and keeps the z-index. Restoring focuses the
    /// window and raises it.
    pub fn toggle_minimize(&mut self, id: WindowId) {
        let Some(window) = self.get_mut(id) else {
            trace!(id, "minimize of unknown window ignored");
            return;
        };

        if window.is_minimized {
            window.is_minimized = false;
            self.focus(id);
            debug!(id, "window restored");
        } else {
            window.is_minimized = true;
            window.is_focused = false;
            debug!(id, "window minimized");
            self.touch();
        }
    }

    /// Maximize a window or restore it to its saved placement
    ///
    /// On mobile the window always ends up maximized. The window is focused
    /// either way.
    pub fn toggle_maximize(&mut self, id: WindowId) {
        let area = self.viewport.available();
        let mobile = self.viewport.is_mobile();
        let Some(window) = self.get_mut(id) else {
            trace!(id, "maximize of unknown window ignored");
            return;
        };

        if mobile || !window.is_maximized {
            window.enter_maximized(area);
        } else {
            window.leave_maximized();
        }
        debug!(id, maximized = window.is_maximized, "window maximize toggled");
        self.focus(id);
    }

    /// Taskbar button action: restore, minimize or focus
    pub fn taskbar_activate(&mut self, id: WindowId) {
        let Some(window) = self.get(id) else {
            return;
        };

        if window.is_minimized || window.is_focused {
            self.toggle_minimize(id);
        } else {
            self.focus(id);
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    /// Move a window to a position computed by an in-progress drag
    ///
    /// Ignored on mobile and for maximized windows. The position is written
    /// as given; drag constraints are the caller's job.
    pub fn update_position(&mut self, id: WindowId, position: Point) {
        if self.viewport.is_mobile() {
            return;
        }
        let Some(window) = self.get_mut(id) else {
            return;
        };
        if window.is_maximized || window.position == position {
            return;
        }

        window.position = position;
        self.touch();
    }

    /// Resize a window, re-validating its position against the viewport
    ///
    /// Ignored on mobile and for maximized windows.
    pub fn update_size(&mut self, id: WindowId, size: Size) {
        let Some(position) = self.get(id).map(|w| w.position) else {
            return;
        };
        self.update_placement(id, Placement::new(position, size));
    }

    /// Move and resize a window in one commit, as a corner resize does
    ///
    /// The pair is clamped together against the viewport. Ignored on mobile
    /// and for maximized windows.
    pub fn update_placement(&mut self, id: WindowId, placement: Placement) {
        if self.viewport.is_mobile() {
            return;
        }
        let area = self.viewport.available();
        let edge_gap = self.config.edge_gap;
        let Some(window) = self.get_mut(id) else {
            return;
        };
        if window.is_maximized {
            return;
        }

        let clamped =
            layout::clamp_placement_with_gap(placement.size, placement.position, area, window.min_size, edge_gap);
        if window.apply(clamped) {
            self.touch();
        }
    }

    /// React to a screen size change
    ///
    /// On mobile every window is forced to fill the viewport. Otherwise each
    /// window is re-clamped against the new area; maximized windows are
    /// re-snapped and their saved placement clamped as well.
    pub fn set_viewport(&mut self, screen: Size) {
        self.viewport.resize(screen, &self.config.breakpoints);
        let area = self.viewport.available();
        let mobile = self.viewport.is_mobile();
        let edge_gap = self.config.edge_gap;

        for window in &mut self.windows {
            if mobile || window.is_maximized {
                window.enter_maximized(area);
                if let Some(restore) = window.restore.as_mut() {
                    *restore = layout::clamp_placement_with_gap(
                        restore.size,
                        restore.position,
                        area,
                        window.min_size,
                        edge_gap,
                    );
                }
            } else {
                let placement =
                    layout::clamp_placement_with_gap(window.size, window.position, area, window.min_size, edge_gap);
                window.apply(placement);
            }
        }

        debug!(
            width = screen.width,
            height = screen.height,
            breakpoint = ?self.viewport.breakpoint(),
            "viewport changed"
        );
        self.touch();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Get a window by ID
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.iter().find(|w| w.id == id)
    }

    fn get_mut(&mut self, id: WindowId) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.id == id)
    }

    /// Window hosting an application, if open
    pub fn find_by_app(&self, app: AppKind) -> Option<&Window> {
        self.windows.iter().find(|w| w.app == app)
    }

    /// Windows in creation order (taskbar order)
    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    /// Get windows sorted by z-index (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Get the currently focused window ID
    pub fn focused(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    /// Get the number of windows
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.viewport.breakpoint()
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    pub fn registry(&self) -> &AppRegistry {
        &self.registry
    }

    /// Counter bumped by every state change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Find which region of which window is at a point (topmost first)
    pub fn region_at(&self, pos: Point) -> Option<(WindowId, WindowRegion)> {
        let mobile = self.viewport.is_mobile();
        let mut windows: Vec<&Window> = self.windows.iter().filter(|w| !w.is_minimized).collect();
        windows.sort_by_key(|w| std::cmp::Reverse(w.z_index));

        windows
            .into_iter()
            .find_map(|window| hit_test_window(window, pos, mobile).map(|region| (window.id, region)))
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn allocate_z(&mut self) -> u32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn spawn_offset(&mut self) -> f32 {
        self.config.spawn_offset_min + self.offsets.next_unit() * self.config.spawn_offset_span
    }

    fn touch(&mut self) {
        self.revision += 1;
    }
}

// =============================================================================
// Hit testing helper functions
// =============================================================================

/// Hit test a specific window at a position
fn hit_test_window(window: &Window, pos: Point, mobile: bool) -> Option<WindowRegion> {
    let resizable = !mobile && !window.is_maximized;

    // Corner handles straddle the frame, so test them before the bounds check
    if resizable {
        if let Some(region) = hit_test_resize_corners(window, pos) {
            return Some(region);
        }
    }

    if !window.rect().contains(pos) {
        return None;
    }

    if let Some(region) = hit_test_buttons(window, pos, !mobile) {
        return Some(region);
    }

    if window.title_bar_rect().contains(pos) {
        return Some(WindowRegion::TitleBar);
    }

    Some(WindowRegion::Content)
}

/// Hit test window buttons (close, maximize, minimize)
fn hit_test_buttons(window: &Window, pos: Point, maximize_shown: bool) -> Option<WindowRegion> {
    if window.close_button_rect().contains(pos) {
        return Some(WindowRegion::CloseButton);
    }
    if maximize_shown && window.maximize_button_rect().contains(pos) {
        return Some(WindowRegion::MaximizeButton);
    }
    if window.minimize_button_rect(maximize_shown).contains(pos) {
        return Some(WindowRegion::MinimizeButton);
    }
    None
}

/// Hit test resize corner handles
fn hit_test_resize_corners(window: &Window, pos: Point) -> Option<WindowRegion> {
    ResizeDirection::ALL
        .into_iter()
        .find(|&direction| window.resize_handle_rect(direction).contains(pos))
        .map(WindowRegion::Resize)
}
