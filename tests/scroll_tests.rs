// Host-side tests for the smoothed scroll model.
// The main crate is wasm-only, so the pure modules are included directly.

#![allow(dead_code)]
mod ease {
    include!("../src/core/ease.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::{InputKind, ScrollModel};

fn make_model() -> ScrollModel {
    let mut m = ScrollModel::new(1.4, 0.9, 1.8);
    m.set_max_scroll(5000.0);
    m
}

#[test]
fn ease_curves_hit_endpoints() {
    for f in [
        ease::quad_in_out as fn(f64) -> f64,
        ease::quart_out,
        ease::quart_in_out,
        ease::quad_out,
        ease::cubic_out,
        ease::linear,
    ] {
        assert!(f(0.0).abs() < 1e-9);
        assert!((f(1.0) - 1.0).abs() < 1e-9);
    }
    // expo_out deliberately overshoots so the tail terminates.
    assert!(ease::expo_out(1.0) >= 1.0 - 1e-9);
    assert!(ease::expo_out(0.0).abs() < 2e-3);
}

#[test]
fn ease_curves_are_monotonic() {
    for f in [
        ease::expo_out as fn(f64) -> f64,
        ease::quad_in_out,
        ease::quart_out,
        ease::quart_in_out,
        ease::quad_out,
        ease::cubic_out,
    ] {
        let mut prev = f(0.0);
        for i in 1..=100 {
            let v = f(i as f64 / 100.0);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
    }
}

#[test]
fn wheel_input_scales_by_multiplier() {
    let mut m = make_model();
    m.apply_input(100.0, InputKind::Wheel);
    assert!((m.target() - 90.0).abs() < 1e-9);
    m.apply_input(100.0, InputKind::Touch);
    assert!((m.target() - 270.0).abs() < 1e-9);
}

#[test]
fn target_clamps_to_scroll_extent() {
    let mut m = make_model();
    m.apply_input(-500.0, InputKind::Wheel);
    assert_eq!(m.target(), 0.0);
    m.apply_input(1e9, InputKind::Wheel);
    assert_eq!(m.target(), 5000.0);
}

#[test]
fn tick_eases_toward_target_and_settles() {
    let mut m = make_model();
    m.apply_input(1000.0, InputKind::Wheel);
    let mut last = 0.0;
    let mut frames = 0;
    while let Some(offset) = m.tick(1.0 / 60.0) {
        assert!(offset >= last);
        last = offset;
        frames += 1;
        assert!(frames < 200, "ease never settled");
    }
    assert!(m.is_settled());
    assert!((m.offset() - 900.0).abs() < 1e-9);
    // Settled model reports no further changes.
    assert_eq!(m.tick(1.0 / 60.0), None);
}

#[test]
fn retarget_mid_ease_restarts_from_current() {
    let mut m = make_model();
    m.apply_input(1000.0, InputKind::Wheel);
    for _ in 0..10 {
        m.tick(1.0 / 60.0);
    }
    let mid = m.offset();
    assert!(mid > 0.0 && mid < 900.0);
    m.apply_input(-2000.0, InputKind::Wheel);
    // First frame after retarget moves from the mid-ease value, not a jump.
    let next = m.tick(1.0 / 60.0).unwrap();
    assert!((next - mid).abs() < 200.0);
}

#[test]
fn stopped_model_ignores_input_and_ticks() {
    let mut m = make_model();
    m.stop();
    assert!(m.is_stopped());
    m.apply_input(1000.0, InputKind::Wheel);
    assert_eq!(m.target(), 0.0);
    assert_eq!(m.tick(1.0 / 60.0), None);

    m.start();
    m.apply_input(1000.0, InputKind::Wheel);
    assert!(m.tick(1.0 / 60.0).is_some());
}

#[test]
fn scroll_to_uses_given_duration() {
    let mut m = make_model();
    m.scroll_to(2000.0, 0.5);
    let mut frames = 0;
    while m.tick(1.0 / 60.0).is_some() {
        frames += 1;
    }
    // 0.5 s at 60 fps.
    assert!((28..=32).contains(&frames), "frames = {frames}");
    assert!((m.offset() - 2000.0).abs() < 1e-9);
}

#[test]
fn set_offset_jumps_without_easing() {
    let mut m = make_model();
    m.set_offset(1234.0);
    assert_eq!(m.offset(), 1234.0);
    assert!(m.is_settled());
    assert_eq!(m.tick(1.0 / 60.0), None);
}

#[test]
fn shrinking_extent_reclamps_position() {
    let mut m = make_model();
    m.set_offset(4000.0);
    m.set_max_scroll(1000.0);
    assert_eq!(m.offset(), 1000.0);
    assert_eq!(m.target(), 1000.0);
}

#[test]
fn smooth_scrolling_requires_fine_pointer_and_full_motion() {
    assert!(scroll::smooth_scroll_enabled(false, false));
    // Reduced motion wins over everything.
    assert!(!scroll::smooth_scroll_enabled(true, false));
    assert!(!scroll::smooth_scroll_enabled(true, true));
    // Coarse pointers keep native scrolling.
    assert!(!scroll::smooth_scroll_enabled(false, true));
}
