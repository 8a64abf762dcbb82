//! Responsive breakpoint classification

use serde::{Deserialize, Serialize};

/// Discrete responsive tier derived from the viewport width
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Breakpoint {
    #[inline]
    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }

    #[inline]
    pub fn is_tablet(self) -> bool {
        self == Breakpoint::Tablet
    }

    #[inline]
    pub fn is_desktop(self) -> bool {
        self == Breakpoint::Desktop
    }
}

/// Width thresholds separating the tiers
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    /// Narrowest width classified as tablet
    pub tablet_min_width: f32,
    /// Narrowest width classified as desktop
    pub desktop_min_width: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet_min_width: 768.0,
            desktop_min_width: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Classify a viewport width
    pub fn classify(&self, width: f32) -> Breakpoint {
        if width >= self.desktop_min_width {
            Breakpoint::Desktop
        } else if width >= self.tablet_min_width {
            Breakpoint::Tablet
        } else {
            Breakpoint::Mobile
        }
    }
}
