use crate::sequence::manifest::GateMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Mutually exclusive playback phases.
///
/// Exactly one phase is live at a time; it decides which input source may move
/// the frame pointer. [`GateMode::Interaction`] walks
/// `Loading -> Waiting -> Autoplay -> Manual`; [`GateMode::IntroReplay`] walks
/// `Loading -> Intro -> WaitingForReplay -> ReplayPlaying -> Manual`.
pub enum Phase {
    /// Frames are still settling; nothing drives the frame pointer.
    Loading,
    /// Loaded, holding the first frame until a qualifying interaction.
    Waiting,
    /// Timed playback started by an interaction.
    Autoplay,
    /// Timed playback started automatically after load.
    Intro,
    /// Intro finished; holding until an interaction triggers the replay.
    WaitingForReplay,
    /// Timed replay from the top, started by an interaction.
    ReplayPlaying,
    /// Terminal: the scroll driver alone moves the frame pointer.
    Manual,
}

impl Phase {
    /// Whether a timed animation currently owns the frame pointer.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Autoplay | Self::Intro | Self::ReplayPlaying)
    }

    /// Whether a qualifying interaction starts a timed animation here.
    pub fn accepts_interaction(self) -> bool {
        matches!(self, Self::Waiting | Self::WaitingForReplay)
    }

    /// Whether all further frame changes come solely from the scroll driver.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Manual)
    }

    /// Phase entered when the gate's unblocking load condition is met.
    pub fn after_loading(gate: GateMode) -> Self {
        match gate {
            GateMode::Interaction => Self::Waiting,
            GateMode::IntroReplay => Self::Intro,
        }
    }

    /// Successor on a first qualifying interaction, if this phase accepts one.
    pub fn on_interaction(self) -> Option<Self> {
        match self {
            Self::Waiting => Some(Self::Autoplay),
            Self::WaitingForReplay => Some(Self::ReplayPlaying),
            _ => None,
        }
    }

    /// Successor when a timed animation reaches progress 1.
    pub fn on_animation_complete(self) -> Option<Self> {
        match self {
            Self::Autoplay | Self::ReplayPlaying => Some(Self::Manual),
            Self::Intro => Some(Self::WaitingForReplay),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/phase.rs"]
mod tests;
