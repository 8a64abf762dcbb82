//! Window chrome metrics

/// Dimensions of the window header and handles, in pixels
pub struct FrameStyle {
    pub title_bar_height: f32,
    /// Side of the square corner resize handles, centered on each corner
    pub resize_handle_size: f32,
    pub button_size: f32,
    pub button_spacing: f32,
    pub button_margin: f32,
}

/// Default frame style matching the UI design
pub const FRAME_STYLE: FrameStyle = FrameStyle {
    title_bar_height: 40.0,
    resize_handle_size: 16.0,
    button_size: 24.0,
    button_spacing: 4.0,
    button_margin: 12.0,
};
