use crate::playback::engine::Effect;
use crate::render::surface::{Surface, render_frame};
use crate::sequence::manifest::AudioConfig;
use crate::sequence::store::SequenceStore;

/// Page-level scroll side effects, treated as opaque external calls.
pub trait ScrollHost {
    /// Toggle the page scroll lock.
    fn set_locked(&mut self, locked: bool);

    /// Set the native scroll offset, in pixels.
    fn set_scroll_top(&mut self, top: f64);

    /// Size the scroll spacer element, in pixels.
    fn set_track_height(&mut self, height: f64);
}

/// Background audio output.
pub trait AudioSink {
    /// Start playing `source` at `volume`, fire and forget.
    fn play(&mut self, source: &str, volume: f64) -> anyhow::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
/// Audio sink that accepts and discards every play request.
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _source: &str, _volume: f64) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default)]
/// Scroll host that records the last applied state, for tests and simulation.
pub struct RecordingHost {
    /// Whether page scrolling is currently locked.
    pub locked: bool,
    /// Last applied scroll offset.
    pub scroll_top: f64,
    /// Last applied spacer height.
    pub track_height: f64,
}

impl ScrollHost for RecordingHost {
    fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    fn set_scroll_top(&mut self, top: f64) {
        self.scroll_top = top;
    }

    fn set_track_height(&mut self, height: f64) {
        self.track_height = height;
    }
}

/// Apply engine effects to the platform capabilities.
///
/// Audio rejections (autoplay policy and the like) are logged and swallowed;
/// they never block visual playback. Returns whether another animation tick was
/// requested, for the caller's scheduling loop.
pub fn apply_effects(
    effects: &[Effect],
    store: &SequenceStore,
    surface: &mut dyn Surface,
    scroll: &mut dyn ScrollHost,
    audio: &mut dyn AudioSink,
    audio_config: Option<&AudioConfig>,
) -> bool {
    let mut tick_requested = false;
    for effect in effects {
        match effect {
            Effect::Render(frame) => render_frame(surface, store, *frame),
            Effect::LockScroll => scroll.set_locked(true),
            Effect::UnlockScroll => scroll.set_locked(false),
            Effect::SetScrollTop(top) => scroll.set_scroll_top(*top),
            Effect::SetTrackHeight(height) => scroll.set_track_height(*height),
            Effect::PlayAudio => {
                let Some(config) = audio_config else {
                    continue;
                };
                if let Err(err) = audio.play(&config.source, config.volume) {
                    tracing::warn!(%err, "audio start rejected; visual playback continues");
                }
            }
            Effect::RequestTick => tick_requested = true,
        }
    }
    tick_requested
}
