use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use infinite_scroll::{Recycler, RecyclerOptions};

const FRAME: f64 = 1.0 / 60.0;

/// 100 items of 100px with 10px spacing in a 500px viewport (stride 110, max scroll 10490).
fn demo_controller() -> Controller {
    let mut c = Controller::new(
        RecyclerOptions::new(100, 100.0).with_space_height(10.0),
        MotionOptions::default(),
    );
    c.initialize(500.0);
    c
}

/// Ticks until idle, returning every offset written along the way.
fn run_to_idle(c: &mut Controller) -> Vec<f64> {
    let mut out = Vec::new();
    for _ in 0..1000 {
        match c.tick(FRAME) {
            Some(off) => out.push(off),
            None => break,
        }
    }
    out
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(-1.0), 0.0);
        assert_eq!(easing.sample(2.0), 1.0);
    }
    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert!(Easing::SmoothStep.sample(0.1) < 0.1);
}

#[test]
fn tween_samples_stay_between_endpoints_and_finish_on_target() {
    let mut t = Tween::new(400.0, 100.0, DEFAULT_DURATION, Easing::SmoothStep);
    let mut prev = t.sample();
    assert_eq!(prev, 400.0);
    while !t.is_done() {
        let v = t.advance(0.01);
        assert!((100.0..=400.0).contains(&v), "v={v}");
        assert!(v <= prev);
        prev = v;
    }
    assert_eq!(t.sample(), 100.0);
}

#[test]
fn tween_ignores_bad_deltas_and_snaps_with_zero_duration() {
    let mut t = Tween::new(0.0, 50.0, 1.0, Easing::Linear);
    assert_eq!(t.advance(-1.0), 0.0);
    assert_eq!(t.advance(f64::NAN), 0.0);
    assert_eq!(t.advance(0.5), 25.0);

    let mut snap = Tween::new(0.0, 50.0, f64::NAN, Easing::Linear);
    assert_eq!(snap.duration, 0.0);
    assert!(snap.is_done());
    assert_eq!(snap.advance(0.0), 50.0);
}

#[test]
fn motion_controller_transitions_idle_animating_idle() {
    let mut m = MotionController::default();
    assert_eq!(m.state(), MotionState::Idle);

    let mut offset = 0.0;
    assert!(!m.advance(FRAME, &mut offset));

    let to = m.move_to(offset, 300.0, 1000.0);
    assert_eq!(to, 300.0);
    assert_eq!(m.state(), MotionState::Animating);
    assert_eq!(m.target(), Some(300.0));

    while m.advance(FRAME, &mut offset) {}
    assert_eq!(offset, 300.0);
    assert_eq!(m.state(), MotionState::Idle);
    assert_eq!(m.target(), None);
}

#[test]
fn motion_targets_are_clamped_not_rejected() {
    let mut m = MotionController::default();
    assert_eq!(m.move_to(0.0, -50.0, 1000.0), 0.0);
    assert_eq!(m.move_to(0.0, 5000.0, 1000.0), 1000.0);
    assert_eq!(m.move_to(0.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(m.move_to(0.0, f64::INFINITY, 1000.0), 1000.0);
    assert_eq!(m.move_to(0.0, 10.0, -5.0), 0.0);
}

#[test]
fn move_to_converges_exactly_without_overshoot() {
    let mut c = demo_controller();
    let target = c.move_to(1234.5);
    assert_eq!(target, 1234.5);

    let offsets = run_to_idle(&mut c);
    assert!(!offsets.is_empty());
    for off in &offsets {
        assert!((0.0..=target).contains(off), "off={off}");
    }
    for w in offsets.windows(2) {
        assert!(w[1] >= w[0]);
    }
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), target);
}

#[test]
fn every_tick_refreshes_the_pool() {
    let mut c = demo_controller();
    c.move_to(5500.0);
    while let Some(off) = c.tick(FRAME) {
        assert_eq!(c.recycler().scroll_offset(), off);
        let expected = c.layout().clamp_start_index(
            c.layout().index_at_offset(off),
            c.recycler().pool_size(),
        );
        assert_eq!(c.recycler().start_index(), expected);
    }
    assert_eq!(c.recycler().start_index(), 50);
}

#[test]
fn new_motion_cancels_the_previous_one() {
    let mut c = demo_controller();
    c.move_to(8000.0);
    c.tick(FRAME);
    c.tick(FRAME);
    let b = c.move_to(220.0);
    assert_eq!(c.motion().target(), Some(b));

    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 220.0);
}

#[test]
fn immediate_retarget_converges_to_last_target() {
    let mut c = demo_controller();
    c.move_to(3000.0);
    c.move_to(660.0);
    let offsets = run_to_idle(&mut c);
    assert!(offsets.iter().all(|&off| off <= 660.0));
    assert_eq!(c.scroll_offset(), 660.0);
}

#[test]
fn step_moves_one_item_from_the_nearest_index() {
    let mut c = demo_controller();
    c.on_scroll_changed(550.0);
    assert_eq!(c.on_step(1), 660.0);
    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 660.0);

    assert_eq!(c.on_step(-1), 550.0);
    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 550.0);
}

#[test]
fn step_clamps_at_both_ends() {
    let mut c = demo_controller();
    assert_eq!(c.on_step(-1), 0.0);

    c.on_scroll_changed(c.max_scroll_offset());
    // Index 96 starts at 10560, past max scroll (10490).
    assert_eq!(c.on_step(1), 10490.0);
}

#[test]
fn jump_ignores_non_numeric_input() {
    let mut c = demo_controller();
    c.on_scroll_changed(330.0);
    assert_eq!(c.on_jump("abc"), None);
    assert_eq!(c.on_jump(""), None);
    assert_eq!(c.on_jump("12.5"), None);
    assert!(!c.is_animating());
    assert_eq!(c.scroll_offset(), 330.0);
    assert_eq!(c.tick(FRAME), None);
}

#[test]
fn jump_centers_the_item_in_the_viewport() {
    let mut c = demo_controller();
    // 50 * 110 - (500 / 2 - 100 / 2)
    assert_eq!(c.on_jump(" 50 "), Some(5300.0));
    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 5300.0);

    // Out of range indices clamp into the dataset, then into the scroll range.
    assert_eq!(c.on_jump("-7"), Some(0.0));
    assert_eq!(c.on_jump("100000"), Some(10490.0));
}

#[test]
fn jump_without_centering_targets_the_item_start() {
    let mut c = Controller::new(
        RecyclerOptions::new(100, 100.0).with_space_height(10.0),
        MotionOptions::default().with_center_on_jump(false),
    );
    c.initialize(500.0);
    assert_eq!(c.on_jump("50"), Some(5500.0));
}

#[test]
fn drag_end_zeroes_velocity_and_snaps_to_nearest_item() {
    let mut c = demo_controller();
    c.set_velocity(-900.0);
    c.on_scroll_changed(560.0);
    assert_eq!(c.on_drag_end(), 550.0);
    assert_eq!(c.velocity(), 0.0);
    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 550.0);

    c.on_scroll_changed(610.0);
    assert_eq!(c.on_drag_end(), 660.0);
}

#[test]
fn drag_begin_cancels_motion() {
    let mut c = demo_controller();
    c.move_to(4000.0);
    c.tick(FRAME);
    let held = c.scroll_offset();
    c.on_drag_begin();
    assert!(!c.is_animating());
    assert_eq!(c.tick(FRAME), None);
    assert_eq!(c.scroll_offset(), held);
}

#[test]
fn scroll_changes_are_clamped_and_keep_motion_running() {
    let mut c = demo_controller();
    c.on_scroll_changed(-40.0);
    assert_eq!(c.scroll_offset(), 0.0);
    c.on_scroll_changed(1.0e9);
    assert_eq!(c.scroll_offset(), 10490.0);

    c.move_to(0.0);
    let off = c.tick(FRAME);
    // The host echoes the programmatic write back.
    if let Some(off) = off {
        c.on_scroll_changed(off);
    }
    assert!(c.is_animating());
}

#[test]
fn empty_dataset_clamps_every_target_to_zero() {
    let mut c = Controller::new(RecyclerOptions::new(0, 100.0), MotionOptions::default());
    c.initialize(500.0);
    assert_eq!(c.on_step(1), 0.0);
    assert_eq!(c.on_jump("42"), Some(0.0));
    assert_eq!(c.on_drag_end(), 0.0);
    run_to_idle(&mut c);
    assert_eq!(c.scroll_offset(), 0.0);
    assert_eq!(c.recycler().active_count(), 0);
}

#[test]
fn dispatch_routes_events() {
    let mut c = demo_controller();
    assert_eq!(c.dispatch(ListEvent::ScrollChanged(550.0)), None);
    assert_eq!(c.scroll_offset(), 550.0);
    assert_eq!(c.dispatch(ListEvent::Step(Step::Next)), Some(660.0));
    assert_eq!(c.dispatch(ListEvent::DragBegin), None);
    assert!(!c.is_animating());
    assert_eq!(c.dispatch(ListEvent::Jump(String::from("abc"))), None);
    assert_eq!(c.dispatch(ListEvent::Step(Step::Previous)), Some(440.0));
    assert_eq!(c.dispatch(ListEvent::DragEnd), Some(550.0));
}

#[test]
fn from_recycler_clamps_a_non_finite_seed_offset() {
    let mut r = Recycler::new(RecyclerOptions::new(100, 100.0).with_space_height(10.0));
    r.initialize(500.0);
    r.refresh(f64::NAN);

    let mut c = Controller::from_recycler(r, MotionOptions::default());
    assert_eq!(c.scroll_offset(), 0.0);

    assert_eq!(c.move_to(1000.0), 1000.0);
    let off = c.tick(0.1).unwrap();
    assert!(off.is_finite());
    assert!((0.0..=1000.0).contains(&off), "{off}");
    assert_eq!(run_to_idle(&mut c).last().copied(), Some(1000.0));
}

#[test]
fn from_recycler_clamps_a_negative_seed_offset() {
    let mut r = Recycler::new(RecyclerOptions::new(100, 100.0).with_space_height(10.0));
    r.initialize(500.0);
    r.refresh(-250.0);

    let c = Controller::from_recycler(r, MotionOptions::default());
    assert_eq!(c.scroll_offset(), 0.0);
}

#[test]
fn motion_from_a_non_finite_start_stays_finite() {
    let mut m = MotionController::default();
    assert_eq!(m.move_to(f64::NAN, 300.0, 1000.0), 300.0);
    let mut offset = f64::NAN;
    assert!(m.advance(FRAME, &mut offset));
    assert_eq!(offset, 300.0);

    m.move_to(f64::INFINITY, 200.0, 1000.0);
    while m.advance(FRAME, &mut offset) {
        assert!(offset.is_finite());
    }
    assert_eq!(offset, 200.0);
}

#[test]
fn zero_duration_motion_snaps_on_first_tick() {
    let mut c = Controller::new(
        RecyclerOptions::new(100, 100.0).with_space_height(10.0),
        MotionOptions::default().with_duration(0.0),
    );
    c.initialize(500.0);
    c.move_to(770.0);
    assert_eq!(c.tick(0.0), Some(770.0));
    assert!(!c.is_animating());
    assert_eq!(c.recycler().start_index(), 7);
}

#[test]
fn example_controller_tween_smoke() {
    let mut c = Controller::new(
        RecyclerOptions::new(10_000, 20.0).with_space_height(4.0),
        MotionOptions::default().with_easing(Easing::EaseInOutCubic),
    );
    c.initialize(480.0);
    let target = c.on_jump("2000").unwrap_or_default();
    assert!(target > 0.0);
    let frames = run_to_idle(&mut c).len();
    assert!((18..=20).contains(&frames), "frames={frames}");
    assert_eq!(c.scroll_offset(), target);
    assert!(c.recycler().active_range().contains(2000));
}
