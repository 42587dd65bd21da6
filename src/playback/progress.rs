use crate::foundation::core::{FrameIndex, Progress};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How a fractional frame position becomes a concrete index.
///
/// Each driver applies one policy consistently: mixing them on the same driver
/// causes visible jitter around frame boundaries.
pub enum RoundPolicy {
    /// Round to the nearest frame. Used by the time driver.
    Nearest,
    /// Floor to the previous frame. Used by the scroll driver.
    Floor,
}

/// Map progress to a fractional frame position: `progress * (frame_count - 1)`.
///
/// An empty or single-frame sequence always maps to position 0.
pub fn frame_position(progress: Progress, frame_count: u32) -> f64 {
    if frame_count <= 1 {
        return 0.0;
    }
    progress.value() * f64::from(frame_count - 1)
}

/// Resolve a fractional position into a clamped [`FrameIndex`].
///
/// The result lies in `[0, frame_count - 1]` regardless of policy or input.
pub fn resolve_frame(policy: RoundPolicy, position: f64, frame_count: u32) -> FrameIndex {
    if frame_count == 0 {
        return FrameIndex(0);
    }
    let max = f64::from(frame_count - 1);
    let rounded = match policy {
        RoundPolicy::Nearest => position.round(),
        RoundPolicy::Floor => position.floor(),
    };
    FrameIndex(rounded.clamp(0.0, max) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/playback/progress.rs"]
mod tests;
