use super::*;

#[test]
fn position_is_linear_in_progress() {
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        let pos = frame_position(Progress::new(p), 145);
        assert!((pos - p * 144.0).abs() < 1e-12);
    }
}

#[test]
fn anchor_points_for_145_frames() {
    let resolve = |p: f64| {
        resolve_frame(
            RoundPolicy::Nearest,
            frame_position(Progress::new(p), 145),
            145,
        )
    };
    assert_eq!(resolve(0.0), FrameIndex(0));
    assert_eq!(resolve(1.0), FrameIndex(144));
    assert_eq!(resolve(0.5), FrameIndex(72));
}

#[test]
fn resolved_index_stays_in_bounds_under_both_policies() {
    for policy in [RoundPolicy::Nearest, RoundPolicy::Floor] {
        for i in 0..=40 {
            let p = f64::from(i) / 40.0;
            let frame = resolve_frame(policy, frame_position(Progress::new(p), 7), 7);
            assert!(frame.0 < 7);
        }
    }
}

#[test]
fn floor_and_nearest_differ_between_frames() {
    // Position 2.6: scroll driver holds frame 2, time driver already shows 3.
    assert_eq!(resolve_frame(RoundPolicy::Floor, 2.6, 10), FrameIndex(2));
    assert_eq!(resolve_frame(RoundPolicy::Nearest, 2.6, 10), FrameIndex(3));
}

#[test]
fn out_of_range_positions_are_clamped() {
    assert_eq!(resolve_frame(RoundPolicy::Floor, -3.0, 5), FrameIndex(0));
    assert_eq!(resolve_frame(RoundPolicy::Nearest, 99.0, 5), FrameIndex(4));
    assert_eq!(resolve_frame(RoundPolicy::Floor, f64::NAN, 5), FrameIndex(0));
}

#[test]
fn degenerate_sequences_map_to_frame_zero() {
    assert_eq!(frame_position(Progress::ONE, 0), 0.0);
    assert_eq!(frame_position(Progress::ONE, 1), 0.0);
    assert_eq!(resolve_frame(RoundPolicy::Nearest, 0.0, 0), FrameIndex(0));
}
