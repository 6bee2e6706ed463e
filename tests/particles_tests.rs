// Host-side tests for the canvas particle field and DOM drift specs.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::{drift_spec, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_field(seed: u64, count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(seed);
    ParticleField::new(&mut rng, count, Vec2::new(800.0, 600.0), 0.3, 2.0, 100.0)
}

#[test]
fn particles_seed_inside_bounds_with_bounded_attributes() {
    let field = make_field(1, 60);
    assert_eq!(field.particles.len(), 60);
    for p in &field.particles {
        assert!((0.0..=800.0).contains(&p.pos.x));
        assert!((0.0..=600.0).contains(&p.pos.y));
        assert!(p.vel.x.abs() <= 0.15 && p.vel.y.abs() <= 0.15);
        assert!((1.0..=3.0).contains(&p.size));
    }
}

#[test]
fn step_reverses_velocity_at_the_bounds() {
    let mut field = make_field(2, 1);
    field.particles[0].pos = Vec2::new(799.9, 300.0);
    field.particles[0].vel = Vec2::new(0.3, 0.0);
    field.step();
    assert!(field.particles[0].vel.x < 0.0);
    field.step();
    assert!(field.particles[0].pos.x < 800.0);
}

#[test]
fn shrunk_bounds_push_particles_back_in() {
    let mut field = make_field(3, 1);
    field.particles[0].pos = Vec2::new(700.0, 300.0);
    field.particles[0].vel = Vec2::new(0.2, 0.0);
    field.set_bounds(Vec2::new(400.0, 600.0));
    field.step();
    assert!(field.particles[0].vel.x < 0.0);
}

#[test]
fn links_fade_with_distance() {
    let mut field = make_field(4, 2);
    field.particles[0].pos = Vec2::new(100.0, 100.0);
    field.particles[1].pos = Vec2::new(150.0, 100.0);
    let links = field.links();
    assert_eq!(links.len(), 1);
    assert!((links[0].alpha - 0.1).abs() < 1e-5);

    field.particles[1].pos = Vec2::new(250.0, 100.0);
    assert!(field.links().is_empty());
}

#[test]
fn drift_specs_stay_in_their_configured_ranges() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let spec = drift_spec(&mut rng, (1.0, 4.0), -100.0, -100.0, 100.0, 3.0, 3.0, 3.0);
        assert!((1.0..=4.0).contains(&spec.size_px));
        assert!((0.0..=100.0).contains(&spec.left_pct));
        assert!((0.0..=100.0).contains(&spec.top_pct));
        assert!((0.2..=0.7).contains(&spec.opacity));
        assert!((-200.0..=-100.0).contains(&spec.rise_px));
        assert!(spec.sway_px.abs() <= 50.0);
        assert!((3.0..=6.0).contains(&spec.duration_sec));
        assert!((0.0..=3.0).contains(&spec.delay_sec));
    }
}
