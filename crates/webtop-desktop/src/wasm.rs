//! WASM exports for the desktop shell
//!
//! This module provides wasm-bindgen exports for the DesktopEngine,
//! allowing the page to drive the desktop and render from snapshots.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::DesktopConfig;
use crate::engine::DesktopEngine;
use crate::input::{CaptureError, InputResult, PointerCapture, PointerId};
use crate::math::{Point, Size};
use crate::window::WindowId;

/// DOM elements hosting each window, used as pointer capture targets
type ElementMap = Rc<RefCell<HashMap<WindowId, web_sys::Element>>>;

/// State shared between the controller and its browser listeners
struct Shared {
    engine: DesktopEngine,
    subscriber: Option<js_sys::Function>,
    notified_revision: u64,
}

/// Pointer capture backed by `Element.setPointerCapture`
struct DomPointerCapture {
    window_id: WindowId,
    elements: ElementMap,
}

impl DomPointerCapture {
    fn element(&self) -> Result<web_sys::Element, CaptureError> {
        self.elements
            .borrow()
            .get(&self.window_id)
            .cloned()
            .ok_or(CaptureError::Detached)
    }
}

impl PointerCapture for DomPointerCapture {
    fn capture(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        self.element()?
            .set_pointer_capture(pointer_id)
            .map_err(|err| CaptureError::Host(format!("{err:?}")))
    }

    fn release(&mut self, pointer_id: PointerId) -> Result<(), CaptureError> {
        self.element()?
            .release_pointer_capture(pointer_id)
            .map_err(|err| CaptureError::Host(format!("{err:?}")))
    }
}

/// Desktop controller for WASM - wraps DesktopEngine with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    shared: Rc<RefCell<Shared>>,
    elements: ElementMap,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl Default for DesktopController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a new desktop controller with the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(DesktopEngine::new())
    }

    /// Create a controller from a JSON config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: &str) -> Result<DesktopController, JsValue> {
        let config = DesktopConfig::from_json(json).map_err(|err| JsValue::from_str(&err.to_string()))?;
        let screen = browser_screen_size().unwrap_or(Size::new(1920.0, 1080.0));
        Ok(Self::from_engine(DesktopEngine::with_config(config, screen)))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Start following the browser `resize` event; idempotent
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.resize_listener.is_some() {
            return Ok(());
        }
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;

        let shared = Rc::clone(&self.shared);
        let listener = Closure::<dyn FnMut()>::new(move || {
            if let Some(screen) = browser_screen_size() {
                shared.borrow_mut().engine.resize(screen.width, screen.height);
                notify(&shared);
            }
        });
        window.add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())?;
        self.resize_listener = Some(listener);

        if let Some(screen) = browser_screen_size() {
            self.shared.borrow_mut().engine.resize(screen.width, screen.height);
        }
        notify(&self.shared);
        Ok(())
    }

    /// Stop following the browser `resize` event
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        let Some(listener) = self.resize_listener.take() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref()) {
                debug!(?err, "failed to remove resize listener");
            }
        }
    }

    /// Resize the desktop viewport
    #[wasm_bindgen]
    pub fn resize(&self, width: f32, height: f32) {
        self.update(|engine| engine.resize(width, height));
    }

    /// Register the callback invoked after every state change
    #[wasm_bindgen]
    pub fn subscribe(&self, callback: js_sys::Function) {
        self.shared.borrow_mut().subscriber = Some(callback);
    }

    #[wasm_bindgen]
    pub fn unsubscribe(&self) {
        self.shared.borrow_mut().subscriber = None;
    }

    /// Attach the DOM element that hosts a window, for pointer capture
    #[wasm_bindgen]
    pub fn register_window_element(&self, id: u64, element: web_sys::Element) {
        self.elements.borrow_mut().insert(id, element);
    }

    #[wasm_bindgen]
    pub fn unregister_window_element(&self, id: u64) {
        self.elements.borrow_mut().remove(&id);
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Open an application by id
    #[wasm_bindgen]
    pub fn launch_app(&self, app_id: &str) -> Option<u64> {
        self.update(|engine| engine.launch_app(app_id))
    }

    /// Close a window
    #[wasm_bindgen]
    pub fn close_window(&self, id: u64) {
        self.update(|engine| engine.close_window(id));
    }

    /// Focus a window
    #[wasm_bindgen]
    pub fn focus_window(&self, id: u64) {
        self.update(|engine| engine.focus_window(id));
    }

    /// Toggle minimize
    #[wasm_bindgen]
    pub fn minimize_window(&self, id: u64) {
        self.update(|engine| engine.minimize_window(id));
    }

    /// Toggle maximize
    #[wasm_bindgen]
    pub fn maximize_window(&self, id: u64) {
        self.update(|engine| engine.maximize_window(id));
    }

    #[wasm_bindgen]
    pub fn move_window(&self, id: u64, x: f32, y: f32) {
        self.update(|engine| engine.move_window(id, Point::new(x, y)));
    }

    #[wasm_bindgen]
    pub fn resize_window(&self, id: u64, width: f32, height: f32) {
        self.update(|engine| engine.resize_window(id, Size::new(width, height)));
    }

    /// Taskbar button click
    #[wasm_bindgen]
    pub fn taskbar_click(&self, id: u64) {
        self.update(|engine| engine.taskbar_click(id));
    }

    /// Get the focused window ID
    #[wasm_bindgen]
    pub fn get_focused_window(&self) -> Option<u64> {
        self.shared.borrow().engine.windows().focused()
    }

    /// Desktop icon entries as JSON
    #[wasm_bindgen]
    pub fn desktop_icons_json(&self) -> String {
        let icons = self.shared.borrow().engine.desktop_icons();
        serde_json::to_string(&icons).unwrap_or_else(|_| "[]".to_string())
    }

    /// Start menu entries as JSON
    #[wasm_bindgen]
    pub fn start_menu_json(&self) -> String {
        let entries = self.shared.borrow().engine.start_menu_entries();
        serde_json::to_string(entries).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&self, x: f32, y: f32, pointer_id: Option<i32>) -> String {
        let result = self.update(|engine| engine.handle_pointer_down(x, y, pointer_id));
        result_json(&result)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&self, x: f32, y: f32) -> String {
        let result = self.update(|engine| engine.handle_pointer_move(x, y));
        result_json(&result)
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&self) -> String {
        let result = self.update(|engine| engine.handle_pointer_up());
        result_json(&result)
    }

    /// Handle pointer cancel event
    #[wasm_bindgen]
    pub fn pointer_cancel(&self) -> String {
        let result = self.update(|engine| engine.handle_pointer_cancel());
        result_json(&result)
    }

    /// Handle touch end event
    #[wasm_bindgen]
    pub fn touch_end(&self) -> String {
        let result = self.update(|engine| engine.handle_touch_end());
        result_json(&result)
    }

    /// Handle touch cancel event
    #[wasm_bindgen]
    pub fn touch_cancel(&self) -> String {
        let result = self.update(|engine| engine.handle_touch_cancel());
        result_json(&result)
    }

    /// Handle double click event
    #[wasm_bindgen]
    pub fn double_click(&self, x: f32, y: f32) -> String {
        let result = self.update(|engine| engine.handle_double_click(x, y));
        result_json(&result)
    }

    /// CSS cursor for the point under the pointer
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        self.shared.borrow().engine.cursor_at(x, y).to_string()
    }

    /// Commit pending drags and resizes; call from `requestAnimationFrame`
    #[wasm_bindgen]
    pub fn animation_frame(&self) -> bool {
        self.update(|engine| engine.animation_frame())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Current desktop state as JSON
    #[wasm_bindgen]
    pub fn snapshot_json(&self) -> String {
        self.shared
            .borrow()
            .engine
            .snapshot()
            .to_json()
            .unwrap_or_else(|_| "{}".to_string())
    }

    #[wasm_bindgen]
    pub fn revision(&self) -> u64 {
        self.shared.borrow().engine.revision()
    }
}

impl DesktopController {
    fn from_engine(engine: DesktopEngine) -> Self {
        let elements: ElementMap = Rc::new(RefCell::new(HashMap::new()));
        let capture_elements = Rc::clone(&elements);
        let engine = engine.with_capture(move |window_id| {
            Box::new(DomPointerCapture {
                window_id,
                elements: Rc::clone(&capture_elements),
            })
        });

        let notified_revision = engine.revision();
        Self {
            shared: Rc::new(RefCell::new(Shared {
                engine,
                subscriber: None,
                notified_revision,
            })),
            elements,
            resize_listener: None,
        }
    }

    /// Run an engine operation, then notify the subscriber if state changed
    fn update<T>(&self, op: impl FnOnce(&mut DesktopEngine) -> T) -> T {
        let result = op(&mut self.shared.borrow_mut().engine);
        notify(&self.shared);
        result
    }
}

impl Drop for DesktopController {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Call the subscriber once per new revision
///
/// The callback runs after the borrow is released so it may read back
/// through the controller.
fn notify(shared: &RefCell<Shared>) {
    let callback = {
        let mut state = shared.borrow_mut();
        let revision = state.engine.revision();
        if revision == state.notified_revision {
            return;
        }
        state.notified_revision = revision;
        state.subscriber.clone()
    };

    if let Some(callback) = callback {
        if let Err(err) = callback.call0(&JsValue::NULL) {
            debug!(?err, "change subscriber threw");
        }
    }
}

fn browser_screen_size() -> Option<Size> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Size::new(width as f32, height as f32))
}

fn result_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}
