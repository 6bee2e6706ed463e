// Host-side tests for the tween timeline.

#![allow(dead_code)]
mod ease {
    include!("../src/core/ease.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}

use timeline::{At, Timeline};

#[test]
fn sequential_adds_append_after_the_end() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::End)
        .add(1, 0.0, 1.0, 0.5, ease::linear, At::End);
    assert_eq!(tl.duration(), 1.5);
    assert_eq!(tl.value(1, 1.0), Some(0.0));
    assert_eq!(tl.value(1, 1.25), Some(0.5));
}

#[test]
fn end_offset_overlaps_the_previous_step() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::End)
        .add(1, 0.0, 1.0, 1.0, ease::linear, At::EndOffset(-0.4));
    assert_eq!(tl.duration(), 1.6);
    // Second tween starts at 0.6.
    assert!((tl.value(1, 0.6).unwrap()).abs() < 1e-9);
    assert!((tl.value(1, 1.1).unwrap() - 0.5).abs() < 1e-9);
}

#[test]
fn with_prev_aligns_to_the_previous_start() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::Abs(2.0))
        .add(1, 5.0, 6.0, 1.0, ease::linear, At::WithPrev);
    assert!((tl.value(1, 2.5).unwrap() - 5.5).abs() < 1e-9);
}

#[test]
fn negative_resolved_start_clamps_to_zero() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 0.2, ease::linear, At::EndOffset(-5.0));
    assert_eq!(tl.value(0, 0.1), Some(0.5));
}

#[test]
fn hold_advances_the_cursor_without_tweens() {
    let mut tl = Timeline::new();
    tl.hold(0.8).add(0, 0.0, 1.0, 1.0, ease::linear, At::End);
    assert_eq!(tl.duration(), 1.8);
    assert_eq!(tl.value(0, 0.4), Some(0.0));
}

#[test]
fn before_first_tween_the_from_value_holds() {
    let mut tl = Timeline::new();
    tl.add(0, 100.0, 0.0, 1.0, ease::linear, At::Abs(2.0));
    assert_eq!(tl.value(0, 0.0), Some(100.0));
    assert_eq!(tl.value(0, 5.0), Some(0.0));
    assert_eq!(tl.value(7, 0.0), None);
}

#[test]
fn latest_starting_tween_wins_a_track() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::Abs(0.0))
        .add(0, 1.0, 0.0, 1.0, ease::linear, At::Abs(2.0));
    assert_eq!(tl.value(0, 1.5), Some(1.0));
    assert_eq!(tl.value(0, 2.5), Some(0.5));
    assert_eq!(tl.value(0, 4.0), Some(0.0));
}

#[test]
fn stagger_offsets_each_track() {
    let mut tl = Timeline::new();
    tl.add_stagger(10, 3, 0.0, 1.0, 0.5, 0.1, ease::linear, At::Abs(0.0));
    assert_eq!(tl.value(10, 0.25), Some(0.5));
    assert!((tl.value(11, 0.25).unwrap() - 0.3).abs() < 1e-9);
    assert_eq!(tl.value(12, 0.1), Some(0.0));
    // End covers the last staggered tween.
    assert!((tl.duration() - 0.7).abs() < 1e-9);
    assert_eq!(tl.tracks(), vec![10, 11, 12]);
}

#[test]
fn marks_fire_once_in_the_crossed_window() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::End)
        .mark(7, At::EndOffset(-0.5));
    assert!(tl.marks_crossed(0.0, 0.4).is_empty());
    assert_eq!(tl.marks_crossed(0.4, 0.6), vec![7]);
    assert!(tl.marks_crossed(0.6, 2.0).is_empty());
}

#[test]
fn finished_waits_for_trailing_marks() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 1.0, 1.0, ease::linear, At::End)
        .mark(1, At::Abs(2.0));
    assert!(!tl.finished(1.5));
    assert!(tl.finished(2.0));
}

#[test]
fn zero_duration_tween_is_a_set() {
    let mut tl = Timeline::new();
    tl.add(0, 0.0, 42.0, 0.0, ease::linear, At::Abs(1.0));
    assert_eq!(tl.value(0, 1.0), Some(42.0));
    assert_eq!(tl.value(0, 0.0), Some(0.0));
}
