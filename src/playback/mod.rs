//! Playback: progress mapping, phase gating and the event-driven engine.

/// Event-driven player state machine.
pub mod engine;
/// Closed phase set and transition table.
pub mod phase;
/// Progress-to-frame mapping with per-driver rounding.
pub mod progress;
