//! Render snapshot of desktop state

use serde::Serialize;
use crate::apps::AppKind;
use crate::breakpoint::Breakpoint;
use crate::math::Size;
use crate::window::{Window, WindowId, WindowManager};

/// Everything the host needs to render one frame of the desktop
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopSnapshot {
    /// Manager revision this snapshot was taken at
    pub revision: u64,
    pub breakpoint: Breakpoint,
    /// Full screen size
    pub screen: Size,
    /// Area available to windows (screen minus taskbar)
    pub viewport: Size,
    /// Windows in creation order
    pub windows: Vec<Window>,
    /// Taskbar buttons, one per window, in creation order
    pub taskbar: Vec<TaskbarItem>,
}

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarItem {
    pub window_id: WindowId,
    pub app_id: AppKind,
    pub title: String,
    pub icon: &'static str,
    /// Highlighted: focused and not minimized
    pub is_active: bool,
    pub is_minimized: bool,
}

impl DesktopSnapshot {
    /// Capture the manager's current state
    pub fn capture(wm: &WindowManager) -> Self {
        let taskbar = wm
            .windows()
            .iter()
            .map(|window| TaskbarItem {
                window_id: window.id(),
                app_id: window.app(),
                title: window.title().to_string(),
                icon: wm.registry().get(window.app()).map(|entry| entry.icon).unwrap_or_default(),
                is_active: window.is_active(),
                is_minimized: window.is_minimized(),
            })
            .collect();

        Self {
            revision: wm.revision(),
            breakpoint: wm.breakpoint(),
            screen: wm.viewport().screen_size(),
            viewport: wm.viewport().available(),
            windows: wm.windows().to_vec(),
            taskbar,
        }
    }

    /// Serialize to JSON for the host
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
