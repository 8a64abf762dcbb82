//! Spawn offset randomness

/// Source of the jitter applied to newly opened windows
///
/// Returns values in `[0, 1)`; the manager scales them into the configured
/// spawn range. Injected so tests can place windows deterministically.
pub trait OffsetSource {
    fn next_unit(&mut self) -> f32;
}

/// Draws from the platform entropy source
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyOffsets;

impl OffsetSource for EntropyOffsets {
    fn next_unit(&mut self) -> f32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            // 24 bits fit an f32 mantissa exactly, keeping the result below 1.0
            Ok(()) => (u32::from_le_bytes(buf) >> 8) as f32 / (1u32 << 24) as f32,
            Err(err) => {
                tracing::debug!(%err, "entropy unavailable, using mid-range spawn offset");
                0.5
            }
        }
    }
}

/// Always returns the same unit value
#[derive(Clone, Copy, Debug)]
pub struct FixedOffset(pub f32);

impl OffsetSource for FixedOffset {
    fn next_unit(&mut self) -> f32 {
        self.0.clamp(0.0, 1.0)
    }
}
