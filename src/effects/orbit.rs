//! Skill constellation layout.
//!
//! Tags inside each `.orbit` ring are spread at equal angles on a circle
//! whose radius comes from `data-radius`. On narrow viewports the inline
//! geometry is cleared so the stylesheet's stacked layout takes over.
//! Re-run on resize.

use crate::constants::*;
use crate::core::orbit::{orbit_size_px, place_tags};
use crate::dom;
use web_sys as web;

pub fn place_all(document: &web::Document) {
    let orbits = dom::query_all(document, ".orbit");
    if orbits.is_empty() {
        return;
    }

    if dom::viewport_size().0 < MOBILE_WIDTH_PX {
        for orbit in &orbits {
            for prop in ["width", "height", "left", "top", "transform"] {
                dom::clear_style(orbit, prop);
            }
            for tag in dom::query_all_scoped(orbit, ".orbit-tag") {
                dom::clear_style(&tag, "left");
                dom::clear_style(&tag, "top");
            }
        }
        return;
    }

    for orbit in &orbits {
        let radius: f32 = orbit
            .get_attribute("data-radius")
            .and_then(|r| r.parse().ok())
            .unwrap_or(ORBIT_DEFAULT_RADIUS);
        let tags = dom::query_all_scoped(orbit, ".orbit-tag");
        if tags.is_empty() {
            continue;
        }

        for (tag, placement) in tags.iter().zip(place_tags(radius, tags.len())) {
            dom::set_style(tag, "left", &format!("{:.3}%", placement.left_pct));
            dom::set_style(tag, "top", &format!("{:.3}%", placement.top_pct));
        }

        let size = orbit_size_px(radius);
        dom::set_style(orbit, "width", &format!("{size:.1}px"));
        dom::set_style(orbit, "height", &format!("{size:.1}px"));
        dom::set_style(orbit, "left", "50%");
        dom::set_style(orbit, "top", "50%");
        dom::set_style(orbit, "transform", "translate(-50%, -50%)");
    }
}
