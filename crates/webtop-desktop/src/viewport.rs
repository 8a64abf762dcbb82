//! Screen viewport and responsive tier

use crate::breakpoint::{Breakpoint, Breakpoints};
use crate::math::Size;

/// Current screen dimensions and their breakpoint classification
///
/// Windows live in the area above the taskbar; [`Viewport::available`] is the
/// size every clamp is computed against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen size in pixels
    screen_size: Size,
    /// Height reserved for the taskbar
    taskbar_height: f32,
    /// Tier derived from the screen width
    breakpoint: Breakpoint,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(1920.0, 1080.0), crate::layout::TASKBAR_HEIGHT, &Breakpoints::default())
    }
}

impl Viewport {
    /// Create a viewport for the given screen size
    pub fn new(screen_size: Size, taskbar_height: f32, breakpoints: &Breakpoints) -> Self {
        Self {
            screen_size,
            taskbar_height,
            breakpoint: breakpoints.classify(screen_size.width),
        }
    }

    /// Update the screen size and re-classify
    pub fn resize(&mut self, screen_size: Size, breakpoints: &Breakpoints) {
        self.screen_size = screen_size;
        self.breakpoint = breakpoints.classify(screen_size.width);
    }

    #[inline]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    /// Area available to windows, excluding the taskbar
    #[inline]
    pub fn available(&self) -> Size {
        Size::new(
            self.screen_size.width.max(0.0),
            (self.screen_size.height - self.taskbar_height).max(0.0),
        )
    }

    #[inline]
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// Dragging, resizing and un-maximizing are disabled on mobile
    #[inline]
    pub fn is_mobile(&self) -> bool {
        self.breakpoint.is_mobile()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_excludes_taskbar() {
        let viewport = Viewport::new(Size::new(1024.0, 768.0), 64.0, &Breakpoints::default());
        let area = viewport.available();
        assert!((area.width - 1024.0).abs() < 0.001);
        assert!((area.height - 704.0).abs() < 0.001);
        assert_eq!(viewport.breakpoint(), Breakpoint::Desktop);
    }

    #[test]
    fn test_resize_reclassifies() {
        let breakpoints = Breakpoints::default();
        let mut viewport = Viewport::new(Size::new(1280.0, 800.0), 64.0, &breakpoints);
        assert!(!viewport.is_mobile());

        viewport.resize(Size::new(390.0, 844.0), &breakpoints);
        assert!(viewport.is_mobile());
        assert!((viewport.screen_size().width - 390.0).abs() < 0.001);
    }

    #[test]
    fn test_tiny_screen_has_empty_area() {
        let viewport = Viewport::new(Size::new(300.0, 40.0), 64.0, &Breakpoints::default());
        assert!(viewport.available().is_empty());
    }
}
