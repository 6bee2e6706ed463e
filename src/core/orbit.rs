/// Placement for one tag, in percent of the orbit container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagPlacement {
    pub left_pct: f32,
    pub top_pct: f32,
    pub angle_deg: f32,
}

/// Place `count` tags on a ring of the given radius (px). The radius maps to
/// percent at a fixed 4 px-per-percent scale, matching the container sizing
/// (`width = radius * 2`).
pub fn place_tags(radius_px: f32, count: usize) -> Vec<TagPlacement> {
    if count == 0 {
        return Vec::new();
    }
    let angle_step = 360.0 / count as f32;
    (0..count)
        .map(|i| {
            let angle_deg = angle_step * i as f32;
            let rad = angle_deg.to_radians();
            TagPlacement {
                left_pct: 50.0 + rad.cos() * radius_px / 4.0,
                top_pct: 50.0 + rad.sin() * radius_px / 4.0,
                angle_deg,
            }
        })
        .collect()
}

/// Container square size for a ring, px.
#[inline]
pub fn orbit_size_px(radius_px: f32) -> f32 {
    radius_px * 2.0
}
