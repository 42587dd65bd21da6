//! Foundation types shared by every stage of the player.

/// Core value types (frame indices, viewport, progress).
pub mod core;
/// Crate error enum and result alias.
pub mod error;
