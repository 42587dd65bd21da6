//! Filmstrip is a scroll- and interaction-driven image sequence player engine.
//!
//! Filmstrip preloads a numbered sequence of still frames, renders the current
//! frame into a viewport-sized surface with cover-fit cropping, and advances the
//! displayed frame either by a fixed-duration timed playback or by mapping page
//! scroll position to a frame index.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `SequenceLoader` hands out frame requests and fills a
//!    `SequenceStore` as completions settle (fixed slots, any order)
//! 2. **Drive**: platform events (`Event`) feed the [`Player`] state machine
//! 3. **Map**: progress from time or scroll -> clamped frame index
//! 4. **Render**: `SequenceStore + FrameIndex -> Surface` (cover-fit crop, full-surface blit)
//!
//! The key design constraints in v0.1:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: the engine never reads clocks or performs IO;
//!   timestamps and bytes arrive through events and the load completion path.
//! - **No fatal playback errors**: failed frames, degenerate scroll extents and
//!   rejected audio degrade to "skip the enhancement, keep the visuals".
//! - **Platform at the seams**: drawing, page scroll and audio are capability
//!   traits, so the whole engine runs headlessly in tests and the CLI.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod assets;
mod foundation;
mod platform;
mod playback;
mod render;
mod sequence;

pub use assets::decode::{PreparedImage, decode_image};
pub use foundation::core::{FrameIndex, Progress, Viewport};
pub use foundation::error::{FilmstripError, FilmstripResult};
pub use platform::host::{AudioSink, NullAudio, RecordingHost, ScrollHost, apply_effects};
pub use playback::engine::{Effect, Event, Interaction, Player, ScrollSample};
pub use playback::phase::Phase;
pub use playback::progress::{RoundPolicy, frame_position, resolve_frame};
pub use render::cover::cover_crop;
pub use render::surface::{SoftwareSurface, Surface, render_frame};
pub use sequence::manifest::{
    AudioConfig, FramePathSpec, GateMode, LoadPolicy, PlayerConfig, normalize_rel_path,
};
pub use sequence::store::{
    FrameRequest, FrameSlot, LoadNotice, SequenceLoader, SequenceStore, load_from_dir,
};
