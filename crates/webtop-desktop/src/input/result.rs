//! Input result type

use serde::Serialize;
use crate::window::WindowId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputResult {
    /// Input was handled internally
    Handled,
    /// Input was not handled (pass through)
    Unhandled,
    /// Input should be forwarded to window content
    #[serde(rename_all = "camelCase")]
    Forward {
        /// Target window
        window_id: WindowId,
        /// X coordinate in content-local space
        local_x: f32,
        /// Y coordinate in content-local space
        local_y: f32,
    },
    /// A commit is pending; the host should schedule an animation frame
    RequestFrame,
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }

    #[inline]
    pub fn needs_frame(&self) -> bool {
        matches!(self, InputResult::RequestFrame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_tagged() {
        let json = serde_json::to_value(InputResult::Forward { window_id: 4, local_x: 1.0, local_y: 2.0 }).unwrap();
        assert_eq!(json["type"], "forward");
        assert_eq!(json["windowId"], 4);
        assert_eq!(serde_json::to_value(InputResult::RequestFrame).unwrap()["type"], "requestFrame");
    }

    #[test]
    fn test_result_classification() {
        assert!(InputResult::RequestFrame.is_handled());
        assert!(!InputResult::Unhandled.is_handled());
        assert!(InputResult::Forward { window_id: 1, local_x: 0.0, local_y: 0.0 }.is_forward());
    }
}
