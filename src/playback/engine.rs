use crate::foundation::core::{FrameIndex, Progress, Viewport};
use crate::foundation::error::FilmstripResult;
use crate::playback::phase::Phase;
use crate::playback::progress::{RoundPolicy, frame_position, resolve_frame};
use crate::sequence::manifest::{GateMode, PlayerConfig};
use crate::sequence::store::LoadNotice;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
/// Qualifying user interaction kinds.
///
/// Any of these unblocks a waiting phase; the distinction only matters to the
/// platform layer (which may prevent default actions per kind).
pub enum Interaction {
    /// Pointer click.
    Click,
    /// Touch start.
    TouchStart,
    /// Wheel movement.
    Wheel,
    /// Key press.
    KeyDown,
    /// Attempted page scroll while scrolling is gated.
    ScrollAttempt,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Native scroll position snapshot, in pixels.
pub struct ScrollSample {
    /// Current scroll offset from the top.
    pub scroll_top: f64,
    /// Total scrollable document height.
    pub scroll_height: f64,
    /// Visible viewport height.
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Discrete input consumed by [`Player::handle`].
pub enum Event {
    /// A load milestone from the sequence store.
    Load(LoadNotice),
    /// A qualifying user interaction.
    Interact(Interaction),
    /// A native scroll position change.
    Scroll(ScrollSample),
    /// An animation tick carrying the current time in milliseconds.
    Tick(u64),
    /// The drawing surface was resized.
    Resize(Viewport),
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Outward side effect requested by the engine.
///
/// Effects are descriptions; the platform shell applies them (see
/// [`crate::apply_effects`]).
pub enum Effect {
    /// Draw the given frame into the surface.
    Render(FrameIndex),
    /// Lock page scrolling.
    LockScroll,
    /// Unlock page scrolling.
    UnlockScroll,
    /// Set the native scroll offset, in pixels.
    SetScrollTop(f64),
    /// Size the scroll spacer to the given height, in pixels.
    SetTrackHeight(f64),
    /// Start background audio, best-effort.
    PlayAudio,
    /// Schedule the next animation tick.
    RequestTick,
}

/// The player engine: one owned state record, advanced by discrete events.
///
/// `Player` performs no IO and never reads clocks; every handler re-checks the
/// live phase before mutating, so stale ticks and late load notices perform no
/// visible effect.
#[derive(Clone, Debug)]
pub struct Player {
    config: PlayerConfig,
    phase: Phase,
    anim_start: Option<u64>,
    last_frame: FrameIndex,
    viewport: Option<Viewport>,
}

impl Player {
    /// Create a player in [`Phase::Loading`] for a validated configuration.
    pub fn new(config: PlayerConfig) -> FilmstripResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            phase: Phase::Loading,
            anim_start: None,
            last_frame: FrameIndex(0),
            viewport: None,
        })
    }

    /// The live phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The most recently resolved frame index.
    pub fn last_frame(&self) -> FrameIndex {
        self.last_frame
    }

    /// The configuration this player was built with.
    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[tracing::instrument(skip(self))]
    /// Advance the state machine by one event, returning the effects to apply.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Load(notice) => self.on_load(notice),
            Event::Interact(_) => self.on_interact(),
            Event::Scroll(sample) => self.on_scroll(sample),
            Event::Tick(now_ms) => self.on_tick(now_ms),
            Event::Resize(viewport) => self.on_resize(viewport),
        }
    }

    fn on_load(&mut self, notice: LoadNotice) -> Vec<Effect> {
        if self.phase != Phase::Loading {
            return Vec::new();
        }

        match (self.config.gate, notice) {
            // First frame settling unblocks the interaction gate and paints
            // immediately so the surface is never blank.
            (GateMode::Interaction, LoadNotice::FirstFrameReady) => {
                self.phase = Phase::Waiting;
                vec![Effect::Render(FrameIndex(0))]
            }
            (GateMode::Interaction, LoadNotice::AllSettled) => Vec::new(),
            // The intro starts only once every frame has settled; late frames
            // would stutter an unprompted animation.
            (GateMode::IntroReplay, LoadNotice::FirstFrameReady) => {
                vec![Effect::Render(FrameIndex(0))]
            }
            (GateMode::IntroReplay, LoadNotice::AllSettled) => {
                self.phase = Phase::Intro;
                self.anim_start = None;
                vec![Effect::LockScroll, Effect::RequestTick]
            }
        }
    }

    fn on_interact(&mut self) -> Vec<Effect> {
        let Some(next) = self.phase.on_interaction() else {
            return Vec::new();
        };
        self.phase = next;
        // Replay restarts from the top; the start stamp is taken from the
        // first tick after this edge.
        self.anim_start = None;

        let mut effects = vec![Effect::LockScroll];
        if self.config.audio.is_some() {
            effects.push(Effect::PlayAudio);
        }
        effects.push(Effect::RequestTick);
        effects
    }

    fn on_tick(&mut self, now_ms: u64) -> Vec<Effect> {
        if !self.phase.is_animating() {
            return Vec::new();
        }

        let start = *self.anim_start.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);
        let progress = Progress::of_elapsed(elapsed, self.config.play_duration_ms);
        let position = frame_position(progress, self.config.frame_count);
        let frame = resolve_frame(RoundPolicy::Nearest, position, self.config.frame_count);
        self.last_frame = frame;

        let mut effects = vec![Effect::Render(frame)];
        if !progress.is_complete() {
            effects.push(Effect::RequestTick);
            return effects;
        }

        // Completion fires exactly once: the phase leaves the animating set
        // here, and stale ticks bail at the guard above.
        self.anim_start = None;
        let Some(next) = self.phase.on_animation_complete() else {
            return effects;
        };
        self.phase = next;
        if next == Phase::Manual {
            effects.push(Effect::UnlockScroll);
            match self.handoff_scroll_top() {
                Some(top) => effects.push(Effect::SetScrollTop(top)),
                None => tracing::warn!(
                    "no scroll extent for handoff; manual mode continues without reposition"
                ),
            }
        }
        effects
    }

    fn on_scroll(&mut self, sample: ScrollSample) -> Vec<Effect> {
        if !self.phase.is_terminal() {
            return Vec::new();
        }

        let max_scroll = sample.scroll_height - sample.viewport_height;
        if !(max_scroll > 0.0) {
            tracing::warn!(max_scroll, "degenerate scroll extent; frame update skipped");
            return Vec::new();
        }

        let progress = Progress::new(sample.scroll_top / max_scroll);
        let position = frame_position(progress, self.config.frame_count);
        let frame = resolve_frame(RoundPolicy::Floor, position, self.config.frame_count);
        self.last_frame = frame;
        vec![Effect::Render(frame)]
    }

    fn on_resize(&mut self, viewport: Viewport) -> Vec<Effect> {
        self.viewport = Some(viewport);
        let track_height = f64::from(viewport.height) * self.config.track_vh;
        vec![
            Effect::SetTrackHeight(track_height),
            Effect::Render(self.last_frame),
        ]
    }

    /// Native scroll offset matching the frame the animation ended on.
    ///
    /// The animation ends at progress 1, so the offset is the full scroll
    /// extent: feeding it back through the scroll driver floors to the same
    /// final frame and the handoff shows no visual jump.
    fn handoff_scroll_top(&self) -> Option<f64> {
        let viewport = self.viewport?;
        let height = f64::from(viewport.height);
        let max_scroll = height * self.config.track_vh - height;
        if max_scroll > 0.0 { Some(max_scroll) } else { None }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/engine.rs"]
mod tests;
