use crate::foundation::error::{FilmstripError, FilmstripResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Index of one frame in the loaded sequence, starting at 0.
pub struct FrameIndex(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Target drawing area dimensions in pixels.
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Construct a viewport, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> FilmstripResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilmstripError::validation(
                "Viewport width/height must be > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Dimensions as a float size.
    pub fn size(self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Width over height.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
/// Fraction of a playback or scroll range, always in `[0, 1]`.
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of the range.
    pub const ZERO: Self = Self(0.0);
    /// Progress at the end of the range.
    pub const ONE: Self = Self(1.0);

    /// Construct a progress value, clamping to `[0, 1]`. Non-finite input maps to 0.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Progress of `elapsed` through a total `duration`, saturating at 1.
    ///
    /// A zero duration is treated as already complete.
    pub fn of_elapsed(elapsed_ms: u64, duration_ms: u64) -> Self {
        if duration_ms == 0 {
            return Self::ONE;
        }
        Self::new((elapsed_ms as f64) / (duration_ms as f64))
    }

    /// Raw value in `[0, 1]`.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the range has been fully traversed.
    pub fn is_complete(self) -> bool {
        self.0 >= 1.0
    }
}
