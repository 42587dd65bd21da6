//! Cover-fit cropping and the drawing surface capability.

/// Cover-fit crop rectangle computation.
pub mod cover;
/// Surface trait, software surface and frame rendering.
pub mod surface;
