use super::*;

#[test]
fn gate_selects_the_unblocked_phase() {
    assert_eq!(Phase::after_loading(GateMode::Interaction), Phase::Waiting);
    assert_eq!(Phase::after_loading(GateMode::IntroReplay), Phase::Intro);
}

#[test]
fn only_waiting_phases_accept_interaction() {
    assert_eq!(Phase::Waiting.on_interaction(), Some(Phase::Autoplay));
    assert_eq!(
        Phase::WaitingForReplay.on_interaction(),
        Some(Phase::ReplayPlaying)
    );
    for phase in [
        Phase::Loading,
        Phase::Autoplay,
        Phase::Intro,
        Phase::ReplayPlaying,
        Phase::Manual,
    ] {
        assert_eq!(phase.on_interaction(), None);
        assert!(!phase.accepts_interaction());
    }
}

#[test]
fn animation_completion_targets() {
    assert_eq!(Phase::Autoplay.on_animation_complete(), Some(Phase::Manual));
    assert_eq!(
        Phase::ReplayPlaying.on_animation_complete(),
        Some(Phase::Manual)
    );
    assert_eq!(
        Phase::Intro.on_animation_complete(),
        Some(Phase::WaitingForReplay)
    );
    assert_eq!(Phase::Waiting.on_animation_complete(), None);
}

#[test]
fn animating_and_terminal_sets_are_disjoint() {
    for phase in [
        Phase::Loading,
        Phase::Waiting,
        Phase::Autoplay,
        Phase::Intro,
        Phase::WaitingForReplay,
        Phase::ReplayPlaying,
        Phase::Manual,
    ] {
        assert!(!(phase.is_animating() && phase.is_terminal()));
        assert!(!(phase.is_animating() && phase.accepts_interaction()));
    }
}
