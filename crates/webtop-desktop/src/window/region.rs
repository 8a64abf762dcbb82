//! Window region for hit testing

use crate::input::ResizeDirection;

/// Region of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (drag handle)
    TitleBar,
    /// Application content
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Maximize button
    MaximizeButton,
    /// Corner resize handle
    Resize(ResizeDirection),
}

impl WindowRegion {
    /// Check if this is a resize region
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WindowRegion::Resize(_))
    }

    /// Check if this is one of the header buttons
    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::TitleBar => "move",
            WindowRegion::Content => "default",
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton => "pointer",
            WindowRegion::Resize(direction) => direction.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_classification() {
        assert!(WindowRegion::Resize(ResizeDirection::NorthWest).is_resize());
        assert!(!WindowRegion::TitleBar.is_resize());
        assert!(WindowRegion::CloseButton.is_button());
        assert!(!WindowRegion::Content.is_button());
    }

    #[test]
    fn test_region_cursor() {
        assert_eq!(WindowRegion::TitleBar.cursor(), "move");
        assert_eq!(WindowRegion::MaximizeButton.cursor(), "pointer");
        assert_eq!(WindowRegion::Resize(ResizeDirection::SouthEast).cursor(), "nwse-resize");
        assert_eq!(WindowRegion::Resize(ResizeDirection::NorthEast).cursor(), "nesw-resize");
    }
}
