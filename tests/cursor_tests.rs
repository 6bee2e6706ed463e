// Host-side tests for the cursor follower simulation.

#![allow(dead_code)]
mod cursor {
    include!("../src/core/cursor.rs");
}

use cursor::{CursorSim, PointerDrift};
use glam::Vec2;

fn make_sim() -> CursorSim {
    CursorSim::new(0.2, 0.1, 0.06, 60.0, 0.35, 0.15)
}

#[test]
fn layers_converge_at_their_follow_rates() {
    let mut sim = make_sim();
    sim.set_pointer(100.0, 0.0);
    sim.step();
    assert!((sim.dot.x - 20.0).abs() < 1e-4);
    assert!((sim.ring.x - 10.0).abs() < 1e-4);
    assert!((sim.glow.x - 6.0).abs() < 1e-4);

    for _ in 0..500 {
        sim.step();
    }
    assert!((sim.dot.x - 100.0).abs() < 0.1);
    assert!((sim.ring.x - 100.0).abs() < 0.1);
    assert!((sim.glow.x - 100.0).abs() < 0.5);
}

#[test]
fn ring_stretch_scales_with_speed_up_to_the_cap() {
    let mut sim = make_sim();
    sim.set_pointer(30.0, 0.0);
    let t = sim.step();
    // Half the speed cap: half the configured stretch.
    assert!((t.scale_x - 1.175).abs() < 1e-3);
    assert!((t.scale_y - 0.925).abs() < 1e-3);

    sim.set_pointer(3000.0, 0.0);
    let t = sim.step();
    assert!((t.scale_x - 1.35).abs() < 1e-3);
    assert!((t.scale_y - 0.85).abs() < 1e-3);
}

#[test]
fn still_pointer_has_no_stretch_or_rotation() {
    let mut sim = make_sim();
    sim.set_pointer(50.0, 50.0);
    sim.step();
    let t = sim.step();
    assert_eq!(t.angle_rad, 0.0);
    assert!((t.scale_x - 1.0).abs() < 1e-6);
    assert!((t.scale_y - 1.0).abs() < 1e-6);
}

#[test]
fn rotation_follows_motion_direction() {
    let mut sim = make_sim();
    sim.set_pointer(0.0, 10.0);
    let t = sim.step();
    assert!((t.angle_rad - std::f32::consts::FRAC_PI_2).abs() < 1e-4);
}

#[test]
fn hover_scale_multiplies_both_axes() {
    let mut sim = make_sim();
    sim.hover_scale = 1.35;
    let t = sim.step();
    assert!((t.scale_x - 1.35).abs() < 1e-6);
    assert!((t.scale_y - 1.35).abs() < 1e-6);
}

#[test]
fn drift_targets_scale_with_range() {
    let mut drift = PointerDrift::new(0.1, 50.0);
    drift.set_pointer_uv(0.5, -0.5);
    assert_eq!(drift.target, Vec2::new(25.0, -25.0));
    let first = drift.step();
    assert!((first.x - 2.5).abs() < 1e-4);

    for _ in 0..500 {
        drift.step();
    }
    assert!((drift.current.x - 25.0).abs() < 0.1);

    drift.clear();
    for _ in 0..500 {
        drift.step();
    }
    assert!(drift.current.length() < 0.1);
}
