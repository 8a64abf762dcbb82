//! Desktop configuration

use serde::{Deserialize, Serialize};
use crate::breakpoint::Breakpoints;
use crate::layout::{TASKBAR_HEIGHT, WINDOW_EDGE_GAP};

/// Errors produced while loading a [`DesktopConfig`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid desktop config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("'{field}' must be a finite, non-negative number, got {value}")]
    OutOfRange { field: &'static str, value: f32 },

    #[error("tablet breakpoint ({tablet}px) must be below desktop breakpoint ({desktop}px)")]
    BreakpointOrder { tablet: f32, desktop: f32 },
}

/// Tunables for window placement and interaction
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Height reserved for the taskbar
    pub taskbar_height: f32,
    /// Gap kept between windows and the right/bottom edges
    pub edge_gap: f32,
    /// Responsive tier thresholds
    pub breakpoints: Breakpoints,
    /// Smallest spawn offset on each axis
    pub spawn_offset_min: f32,
    /// Width of the spawn offset range on each axis
    pub spawn_offset_span: f32,
    /// Minimum pointer travel before a drag commits a new position
    pub drag_threshold: f32,
    /// Floor applied to width/height while resizing, before clamping
    pub resize_min_extent: f32,
    /// First z-index handed out
    pub first_z_index: u32,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            taskbar_height: TASKBAR_HEIGHT,
            edge_gap: WINDOW_EDGE_GAP,
            breakpoints: Breakpoints::default(),
            spawn_offset_min: 50.0,
            spawn_offset_span: 200.0,
            drag_threshold: 0.5,
            resize_min_extent: 100.0,
            first_z_index: 10,
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("taskbarHeight", self.taskbar_height),
            ("edgeGap", self.edge_gap),
            ("spawnOffsetMin", self.spawn_offset_min),
            ("spawnOffsetSpan", self.spawn_offset_span),
            ("dragThreshold", self.drag_threshold),
            ("resizeMinExtent", self.resize_min_extent),
            ("tabletMinWidth", self.breakpoints.tablet_min_width),
            ("desktopMinWidth", self.breakpoints.desktop_min_width),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }

        let Breakpoints { tablet_min_width, desktop_min_width } = self.breakpoints;
        if tablet_min_width >= desktop_min_width {
            return Err(ConfigError::BreakpointOrder {
                tablet: tablet_min_width,
                desktop: desktop_min_width,
            });
        }

        Ok(())
    }
}
