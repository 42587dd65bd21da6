use super::*;
use crate::sequence::manifest::{AudioConfig, FramePathSpec, LoadPolicy};

fn config(gate: GateMode) -> PlayerConfig {
    PlayerConfig {
        frame_count: 145,
        frames: FramePathSpec {
            base: "frames".to_string(),
            prefix: "f_".to_string(),
            pad: 3,
            extension: "jpg".to_string(),
            index_base: 0,
        },
        track_vh: 6.0,
        play_duration_ms: 4000,
        gate,
        load: LoadPolicy::Eager,
        audio: Some(AudioConfig {
            source: "audio/loop.mp3".to_string(),
            volume: 0.4,
        }),
    }
}

fn sized_player(gate: GateMode) -> Player {
    let mut player = Player::new(config(gate)).unwrap();
    // 720 * 6.0 track => scroll_height 4320, max_scroll 3600.
    player.handle(Event::Resize(Viewport::new(1280, 720).unwrap()));
    player
}

fn manual_player() -> Player {
    let mut player = sized_player(GateMode::Interaction);
    player.handle(Event::Load(LoadNotice::FirstFrameReady));
    player.handle(Event::Interact(Interaction::Click));
    player.handle(Event::Tick(1000));
    player.handle(Event::Tick(5000));
    assert_eq!(player.phase(), Phase::Manual);
    player
}

fn scroll(top: f64) -> Event {
    Event::Scroll(ScrollSample {
        scroll_top: top,
        scroll_height: 4320.0,
        viewport_height: 720.0,
    })
}

#[test]
fn resize_sizes_the_track_and_rerenders() {
    let mut player = Player::new(config(GateMode::Interaction)).unwrap();
    let effects = player.handle(Event::Resize(Viewport::new(1280, 720).unwrap()));
    assert_eq!(
        effects,
        vec![
            Effect::SetTrackHeight(4320.0),
            Effect::Render(FrameIndex(0))
        ]
    );
}

#[test]
fn interaction_flow_reaches_manual_with_seamless_handoff() {
    let mut player = sized_player(GateMode::Interaction);

    let effects = player.handle(Event::Load(LoadNotice::FirstFrameReady));
    assert_eq!(player.phase(), Phase::Waiting);
    assert_eq!(effects, vec![Effect::Render(FrameIndex(0))]);

    let effects = player.handle(Event::Interact(Interaction::Click));
    assert_eq!(player.phase(), Phase::Autoplay);
    assert_eq!(
        effects,
        vec![Effect::LockScroll, Effect::PlayAudio, Effect::RequestTick]
    );

    // Start stamped by the first tick; midpoint rounds to frame 72.
    let effects = player.handle(Event::Tick(1000));
    assert_eq!(
        effects,
        vec![Effect::Render(FrameIndex(0)), Effect::RequestTick]
    );
    let effects = player.handle(Event::Tick(3000));
    assert_eq!(
        effects,
        vec![Effect::Render(FrameIndex(72)), Effect::RequestTick]
    );

    let effects = player.handle(Event::Tick(5000));
    assert_eq!(player.phase(), Phase::Manual);
    assert_eq!(
        effects,
        vec![
            Effect::Render(FrameIndex(144)),
            Effect::UnlockScroll,
            Effect::SetScrollTop(3600.0)
        ]
    );

    // Feeding the handoff offset back through the scroll driver lands on the
    // same final frame: no visual jump.
    let effects = player.handle(scroll(3600.0));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(144))]);
}

#[test]
fn repeated_interactions_start_one_autoplay_cycle() {
    let mut player = sized_player(GateMode::Interaction);
    player.handle(Event::Load(LoadNotice::FirstFrameReady));

    let first = player.handle(Event::Interact(Interaction::Wheel));
    assert!(!first.is_empty());
    for interaction in [
        Interaction::Click,
        Interaction::TouchStart,
        Interaction::KeyDown,
        Interaction::ScrollAttempt,
    ] {
        assert!(player.handle(Event::Interact(interaction)).is_empty());
    }
    assert_eq!(player.phase(), Phase::Autoplay);
}

#[test]
fn stale_tick_after_completion_is_a_no_op() {
    let mut player = manual_player();
    assert!(player.handle(Event::Tick(5016)).is_empty());
}

#[test]
fn scroll_driver_floors_between_frames() {
    let mut player = manual_player();

    let effects = player.handle(scroll(0.0));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(0))]);

    // 1799 / 3600 * 144 = 71.96; the scroll driver floors.
    let effects = player.handle(scroll(1799.0));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(71))]);

    let effects = player.handle(scroll(1800.0));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(72))]);

    // Overscroll clamps to the last frame.
    let effects = player.handle(scroll(9999.0));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(144))]);
}

#[test]
fn degenerate_scroll_extent_updates_nothing() {
    let mut player = manual_player();
    let before = player.last_frame();

    let effects = player.handle(Event::Scroll(ScrollSample {
        scroll_top: 10.0,
        scroll_height: 720.0,
        viewport_height: 720.0,
    }));
    assert!(effects.is_empty());
    assert_eq!(player.last_frame(), before);
}

#[test]
fn events_outside_their_phase_are_ignored() {
    let mut player = sized_player(GateMode::Interaction);

    assert!(player.handle(Event::Interact(Interaction::Click)).is_empty());
    assert!(player.handle(Event::Tick(100)).is_empty());
    assert!(player.handle(scroll(100.0)).is_empty());
    assert_eq!(player.phase(), Phase::Loading);

    player.handle(Event::Load(LoadNotice::FirstFrameReady));
    assert_eq!(player.phase(), Phase::Waiting);

    // Late and duplicate load notices no longer transition anything.
    assert!(player.handle(Event::Load(LoadNotice::FirstFrameReady)).is_empty());
    assert!(player.handle(Event::Load(LoadNotice::AllSettled)).is_empty());
    assert!(player.handle(scroll(100.0)).is_empty());
    assert_eq!(player.phase(), Phase::Waiting);
}

#[test]
fn intro_replay_flow_replays_from_the_top() {
    let mut player = sized_player(GateMode::IntroReplay);

    // First frame paints immediately but the gate waits for the full preload.
    let effects = player.handle(Event::Load(LoadNotice::FirstFrameReady));
    assert_eq!(effects, vec![Effect::Render(FrameIndex(0))]);
    assert_eq!(player.phase(), Phase::Loading);

    let effects = player.handle(Event::Load(LoadNotice::AllSettled));
    assert_eq!(player.phase(), Phase::Intro);
    assert_eq!(effects, vec![Effect::LockScroll, Effect::RequestTick]);

    // Interactions and scrolls cannot move the pointer during the intro.
    assert!(player.handle(Event::Interact(Interaction::Click)).is_empty());

    player.handle(Event::Tick(0));
    let effects = player.handle(Event::Tick(4000));
    assert_eq!(player.phase(), Phase::WaitingForReplay);
    assert_eq!(effects, vec![Effect::Render(FrameIndex(144))]);

    assert!(player.handle(scroll(500.0)).is_empty());

    let effects = player.handle(Event::Interact(Interaction::ScrollAttempt));
    assert_eq!(player.phase(), Phase::ReplayPlaying);
    assert_eq!(
        effects,
        vec![Effect::LockScroll, Effect::PlayAudio, Effect::RequestTick]
    );

    // The replay restarts at progress 0, not where the intro ended.
    let effects = player.handle(Event::Tick(10_000));
    assert_eq!(
        effects,
        vec![Effect::Render(FrameIndex(0)), Effect::RequestTick]
    );

    let effects = player.handle(Event::Tick(14_000));
    assert_eq!(player.phase(), Phase::Manual);
    assert_eq!(
        effects,
        vec![
            Effect::Render(FrameIndex(144)),
            Effect::UnlockScroll,
            Effect::SetScrollTop(3600.0)
        ]
    );
}

#[test]
fn handoff_without_viewport_still_unlocks() {
    let mut player = Player::new(config(GateMode::Interaction)).unwrap();
    player.handle(Event::Load(LoadNotice::FirstFrameReady));
    player.handle(Event::Interact(Interaction::Click));
    player.handle(Event::Tick(0));

    let effects = player.handle(Event::Tick(4000));
    assert_eq!(player.phase(), Phase::Manual);
    assert_eq!(
        effects,
        vec![Effect::Render(FrameIndex(144)), Effect::UnlockScroll]
    );
}

#[test]
fn resize_after_playback_rerenders_the_held_frame() {
    let mut player = manual_player();
    player.handle(scroll(1800.0));

    let effects = player.handle(Event::Resize(Viewport::new(800, 600).unwrap()));
    assert_eq!(
        effects,
        vec![
            Effect::SetTrackHeight(3600.0),
            Effect::Render(FrameIndex(72))
        ]
    );
}
