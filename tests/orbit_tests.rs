// Host-side tests for constellation ring placement.

#![allow(dead_code)]
mod orbit {
    include!("../src/core/orbit.rs");
}

use orbit::{orbit_size_px, place_tags};

#[test]
fn four_tags_land_on_the_axes() {
    let tags = place_tags(180.0, 4);
    assert_eq!(tags.len(), 4);
    // radius/4 = 45% from center.
    assert!((tags[0].left_pct - 95.0).abs() < 1e-3);
    assert!((tags[0].top_pct - 50.0).abs() < 1e-3);
    assert!((tags[1].left_pct - 50.0).abs() < 1e-3);
    assert!((tags[1].top_pct - 95.0).abs() < 1e-3);
    assert!((tags[2].left_pct - 5.0).abs() < 1e-3);
    assert!((tags[3].top_pct - 5.0).abs() < 1e-3);
}

#[test]
fn angles_divide_the_circle_evenly() {
    let tags = place_tags(120.0, 5);
    for (i, tag) in tags.iter().enumerate() {
        assert!((tag.angle_deg - 72.0 * i as f32).abs() < 1e-3);
    }
}

#[test]
fn all_tags_sit_on_the_ring() {
    let tags = place_tags(160.0, 7);
    for tag in &tags {
        let dx = tag.left_pct - 50.0;
        let dy = tag.top_pct - 50.0;
        assert!(((dx * dx + dy * dy).sqrt() - 40.0).abs() < 1e-2);
    }
}

#[test]
fn empty_ring_and_container_size() {
    assert!(place_tags(180.0, 0).is_empty());
    assert_eq!(orbit_size_px(180.0), 360.0);
}
