//! Window management module
//!
//! Provides window lifecycle, focus management, and hit testing.

#[allow(clippy::module_inception)]
mod window;
mod frame;
mod manager;
mod offsets;
mod region;

pub use frame::{FrameStyle, FRAME_STYLE};
pub use manager::WindowManager;
pub use offsets::{EntropyOffsets, FixedOffset, OffsetSource};
pub use region::WindowRegion;
pub use window::Window;

/// Unique window identifier
pub type WindowId = u64;
