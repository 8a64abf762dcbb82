//! Window lifecycle and launcher actions

use tracing::debug;
use crate::apps::{AppEntry, AppKind};
use crate::math::{Point, Size};
use crate::window::WindowId;
use super::DesktopEngine;

impl DesktopEngine {
    /// Open an application from a desktop icon or the start menu
    ///
    /// Unknown ids are ignored.
    pub fn launch_app(&mut self, app_id: &str) -> Option<WindowId> {
        let id = self.windows.open_app(app_id)?;
        self.view_mut(id);
        Some(id)
    }

    /// Open an application by tag
    pub fn open_app(&mut self, app: AppKind) -> Option<WindowId> {
        let id = self.windows.open(app)?;
        self.view_mut(id);
        Some(id)
    }

    /// Close a window, releasing any pointer it holds
    pub fn close_window(&mut self, id: WindowId) {
        if let Some(mut view) = self.views.remove(&id) {
            view.end();
        }
        if self.active == Some(id) {
            self.active = None;
        }
        self.windows.close(id);
    }

    /// Focus a window
    pub fn focus_window(&mut self, id: WindowId) {
        self.windows.focus(id);
    }

    /// Toggle a window's minimized state
    pub fn minimize_window(&mut self, id: WindowId) {
        self.end_interaction(id);
        self.windows.toggle_minimize(id);
    }

    /// Toggle a window's maximized state
    pub fn maximize_window(&mut self, id: WindowId) {
        self.end_interaction(id);
        self.windows.toggle_maximize(id);
    }

    /// Move a window, ending any drag or resize on it
    pub fn move_window(&mut self, id: WindowId, position: Point) {
        self.end_interaction(id);
        self.windows.update_position(id, position);
    }

    /// Resize a window, ending any drag or resize on it
    pub fn resize_window(&mut self, id: WindowId, size: Size) {
        self.end_interaction(id);
        self.windows.update_size(id, size);
    }

    /// Taskbar button: restore when minimized, minimize when focused,
    /// focus otherwise
    pub fn taskbar_click(&mut self, id: WindowId) {
        debug!(id, "taskbar click");
        self.end_interaction(id);
        self.windows.taskbar_activate(id);
    }

    /// Apps with a desktop shortcut, in registry order
    pub fn desktop_icons(&self) -> Vec<&'static AppEntry> {
        self.windows.registry().desktop_entries().collect()
    }

    /// Every app, in registry order
    pub fn start_menu_entries(&self) -> &'static [AppEntry] {
        self.windows.registry().entries()
    }

    fn end_interaction(&mut self, id: WindowId) {
        if let Some(view) = self.views.get_mut(&id) {
            view.end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::create_test_engine;
    use crate::apps::AppKind;
    use crate::math::{Point, Size};

    #[test]
    fn test_launch_app_creates_view() {
        let mut engine = create_test_engine();
        let id = engine.launch_app("about").unwrap();

        assert!(engine.views.contains_key(&id));
        assert_eq!(engine.windows.focused(), Some(id));
    }

    #[test]
    fn test_launch_unknown_app_is_ignored() {
        let mut engine = create_test_engine();
        assert!(engine.launch_app("terminal").is_none());
        assert_eq!(engine.windows.count(), 0);
        assert!(engine.views.is_empty());
    }

    #[test]
    fn test_launch_existing_app_reuses_window() {
        let mut engine = create_test_engine();
        let first = engine.launch_app("resume").unwrap();
        engine.minimize_window(first);

        assert_eq!(engine.open_app(AppKind::Resume), Some(first));
        assert!(!engine.windows.get(first).unwrap().is_minimized());
        assert_eq!(engine.views.len(), 1);
    }

    #[test]
    fn test_close_window_removes_view() {
        let mut engine = create_test_engine();
        let id = engine.launch_app("contact").unwrap();
        engine.close_window(id);

        assert!(engine.windows.get(id).is_none());
        assert!(engine.views.is_empty());
    }

    #[test]
    fn test_taskbar_click_cycle() {
        let mut engine = create_test_engine();
        let about = engine.launch_app("about").unwrap();
        engine.launch_app("resume").unwrap();

        engine.taskbar_click(about);
        assert_eq!(engine.windows.focused(), Some(about));
        engine.taskbar_click(about);
        assert!(engine.windows.get(about).unwrap().is_minimized());
        engine.taskbar_click(about);
        assert!(engine.windows.get(about).unwrap().is_active());
    }

    #[test]
    fn test_move_window_ends_drag() {
        let mut engine = create_test_engine();
        let id = engine.launch_app("notepad").unwrap();
        engine.handle_pointer_down(100.0, 60.0, Some(3));
        engine.handle_pointer_move(300.0, 300.0);

        engine.move_window(id, Point::new(400.0, 200.0));
        assert!(engine.views[&id].interaction().is_idle());
        assert!(!engine.needs_frame());
        assert_eq!(engine.windows().get(id).unwrap().position(), Point::new(400.0, 200.0));

        engine.resize_window(id, Size::new(320.0, 240.0));
        assert_eq!(engine.windows().get(id).unwrap().size(), Size::new(320.0, 240.0));
    }

    #[test]
    fn test_launcher_surfaces() {
        let engine = create_test_engine();
        let icons: Vec<&str> = engine.desktop_icons().iter().map(|entry| entry.id()).collect();
        assert_eq!(icons, vec!["about", "resume", "skills", "certificates", "contact"]);

        let menu: Vec<AppKind> = engine.start_menu_entries().iter().map(|entry| entry.kind).collect();
        assert_eq!(menu, AppKind::ALL.to_vec());
    }
}
