//! Window management core for the Webtop browser desktop
//!
//! This crate provides the state behind a portfolio-style desktop that runs
//! in the browser:
//! - Window management (open, close, focus, minimize, maximize, z-order)
//! - Placement clamping against the viewport and responsive breakpoints
//! - Hit testing and the drag/resize interaction state machine
//! - Launcher surfaces (desktop icons, start menu, taskbar)
//!
//! ## Architecture
//!
//! The crate is organized into focused modules:
//!
//! - [`math`]: Core geometry types (`Point`, `Size`, `Rect`)
//! - [`layout`]: Pure placement clamping functions
//! - [`apps`]: Static application registry
//! - [`window`]: Window records, lifecycle and hit testing
//! - [`input`]: Pointer events, capture and per-window views
//!
//! ## Example
//!
//! ```rust
//! use webtop_desktop::{DesktopEngine, AppKind};
//!
//! let mut engine = DesktopEngine::new();
//! engine.resize(1280.0, 800.0);
//!
//! let id = engine.launch_app("calculator").unwrap();
//! let window = engine.windows().get(id).unwrap();
//! assert_eq!(window.app(), AppKind::Calculator);
//! assert!(window.is_focused());
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Single Writer**: Windows change only through `DesktopEngine` methods
//! 3. **Injectable Effects**: Spawn randomness and pointer capture sit behind traits

pub mod math;
pub mod layout;
pub mod apps;
pub mod window;
pub mod input;

mod breakpoint;
mod config;
mod engine;
mod snapshot;
mod viewport;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Point, Rect, Size};
pub use layout::Placement;
pub use apps::{AppContent, AppEntry, AppKind, AppRegistry, UnknownAppError};
pub use window::{
    EntropyOffsets, FixedOffset, FrameStyle, OffsetSource, Window, WindowId, WindowManager, WindowRegion,
    FRAME_STYLE,
};
pub use input::{
    CaptureError, InputResult, Interaction, NoCapture, ParseDirectionError, PointerCapture, PointerEvent,
    PointerId, ResizeDirection, WindowView,
};

pub use breakpoint::{Breakpoint, Breakpoints};
pub use config::{ConfigError, DesktopConfig};
pub use engine::{CaptureFactory, DesktopEngine};
pub use snapshot::{DesktopSnapshot, TaskbarItem};
pub use viewport::Viewport;
