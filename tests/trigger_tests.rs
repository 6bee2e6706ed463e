// Host-side tests for the scroll trigger zone state machine.

#![allow(dead_code)]
mod trigger {
    include!("../src/core/trigger.rs");
}

use trigger::{TriggerZone, ZoneConfig, ZoneEvent};

// A region at document top 2000, height 400, viewport 1000.
fn zone(config: ZoneConfig) -> TriggerZone {
    TriggerZone::from_region(2000.0, 400.0, 1000.0, config)
}

#[test]
fn enters_when_region_top_crosses_start_fraction() {
    // start_frac 0.8: fires once the offset passes 2000 - 800 = 1200.
    let mut z = zone(ZoneConfig::once_at(0.8));
    assert_eq!(z.update(1199.0).0, ZoneEvent::None);
    assert_eq!(z.update(1200.0).0, ZoneEvent::Enter);
}

#[test]
fn once_zone_never_refires() {
    let mut z = zone(ZoneConfig::once_at(0.8));
    assert_eq!(z.update(1500.0).0, ZoneEvent::Enter);
    assert!(z.is_terminal());
    assert_eq!(z.update(0.0).0, ZoneEvent::None);
    assert_eq!(z.update(1500.0).0, ZoneEvent::None);
}

#[test]
fn toggling_zone_reports_leave_and_reenter() {
    let mut z = zone(ZoneConfig::toggling(0.8, 0.0));
    // Interval is [1200, 2400].
    assert_eq!(z.update(1300.0).0, ZoneEvent::Enter);
    assert_eq!(z.update(2500.0).0, ZoneEvent::Leave);
    assert_eq!(z.update(2300.0).0, ZoneEvent::Enter);
    assert_eq!(z.update(1000.0).0, ZoneEvent::Leave);
    assert_eq!(z.update(1300.0).0, ZoneEvent::Enter);
}

#[test]
fn progress_scrubs_zero_to_one_across_the_zone() {
    let mut z = zone(ZoneConfig::toggling(1.0, 0.0));
    // Interval is [1000, 2400], span 1400.
    let (_, p) = z.update(1000.0);
    assert_eq!(p, Some(0.0));
    let (_, p) = z.update(1700.0);
    assert!((p.unwrap() - 0.5).abs() < 1e-9);
    let (_, p) = z.update(2400.0);
    assert_eq!(p, Some(1.0));
}

#[test]
fn progress_reports_final_clamped_value_on_leave() {
    let mut z = zone(ZoneConfig::toggling(1.0, 0.0));
    z.update(1700.0);
    // Jumping past the end still settles the scrub at 1.0.
    let (event, p) = z.update(3000.0);
    assert_eq!(event, ZoneEvent::Leave);
    assert_eq!(p, Some(1.0));
    // Outside and already settled: nothing further.
    let (event, p) = z.update(3100.0);
    assert_eq!(event, ZoneEvent::None);
    assert_eq!(p, None);
}

#[test]
fn jump_clear_across_a_once_zone_still_fires_enter() {
    // Interval is [1200, 2400]; an anchor jump can skip it entirely in
    // one update.
    let mut z = zone(ZoneConfig::once_at(0.8));
    assert_eq!(z.update(100.0).0, ZoneEvent::None);
    assert_eq!(z.update(5000.0).0, ZoneEvent::Enter);
    assert!(z.is_terminal());
    assert_eq!(z.update(1300.0).0, ZoneEvent::None);
}

#[test]
fn jump_clear_across_a_toggling_zone_enters_then_leaves() {
    let mut z = zone(ZoneConfig::toggling(0.8, 0.0));
    z.update(100.0);
    let (event, p) = z.update(5000.0);
    assert_eq!(event, ZoneEvent::Enter);
    // The scrub settles at the far endpoint.
    assert_eq!(p, Some(1.0));
    // Still outside on the next update, so the pair stays alternating.
    assert_eq!(z.update(5000.0).0, ZoneEvent::Leave);
    assert_eq!(z.update(1300.0).0, ZoneEvent::Enter);
}

#[test]
fn jump_back_across_a_toggling_zone_settles_at_zero() {
    let mut z = zone(ZoneConfig::toggling(0.8, 0.0));
    z.update(5000.0);
    let (event, p) = z.update(100.0);
    assert_eq!(event, ZoneEvent::Enter);
    assert_eq!(p, Some(0.0));
}

#[test]
fn unchanged_progress_is_not_repeated() {
    let mut z = zone(ZoneConfig::toggling(1.0, 0.0));
    let (_, p) = z.update(1700.0);
    assert!(p.is_some());
    let (_, p) = z.update(1700.0);
    assert_eq!(p, None);
}

#[test]
fn degenerate_zone_clamps_progress() {
    // end_frac far enough that end would precede start; zone collapses.
    let mut z = TriggerZone::from_region(2000.0, 100.0, 1000.0, ZoneConfig::toggling(1.0, 2.0));
    let (event, p) = z.update(1000.0);
    assert_eq!(event, ZoneEvent::Enter);
    assert_eq!(p, Some(1.0));
}

#[test]
fn remeasure_moves_the_interval_but_keeps_terminal_state() {
    let config = ZoneConfig::once_at(0.8);
    let mut z = zone(config);
    z.update(1500.0);
    assert!(z.is_terminal());
    z.remeasure(3000.0, 400.0, 1000.0, config);
    assert!(z.is_terminal());
    assert_eq!(z.update(2500.0).0, ZoneEvent::None);
}

#[test]
fn remeasure_shifts_geometry_for_live_zones() {
    let config = ZoneConfig::toggling(0.8, 0.0);
    let mut z = zone(config);
    assert_eq!(z.update(1300.0).0, ZoneEvent::Enter);
    // The region moved down; the same offset now sits before the zone.
    z.remeasure(4000.0, 400.0, 1000.0, config);
    assert_eq!(z.update(1300.0).0, ZoneEvent::Leave);
    assert_eq!(z.update(3200.0).0, ZoneEvent::Enter);
}
