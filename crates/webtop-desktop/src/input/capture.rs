//! Pointer capture seam

/// Host pointer identifier (DOM `pointerId`)
pub type PointerId = i32;

/// Failure reported by a [`PointerCapture`] implementation
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CaptureError {
    #[error("pointer {0} is not active")]
    InactivePointer(PointerId),

    #[error("capture target is no longer attached")]
    Detached,

    #[error("pointer capture failed: {0}")]
    Host(String),
}

/// Routes a pointer's events to one window for the length of an interaction
///
/// Errors are logged by the caller and never abort the interaction.
pub trait PointerCapture {
    fn capture(&mut self, pointer_id: PointerId) -> Result<(), CaptureError>;
    fn release(&mut self, pointer_id: PointerId) -> Result<(), CaptureError>;
}

/// Capture that does nothing; for hosts without pointer capture
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    fn capture(&mut self, _pointer_id: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }

    fn release(&mut self, _pointer_id: PointerId) -> Result<(), CaptureError> {
        Ok(())
    }
}
