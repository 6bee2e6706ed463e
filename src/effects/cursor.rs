//! Custom cursor follower.
//!
//! Hidden on coarse-pointer devices and narrow viewports. Three layers (dot,
//! ring, glow) trail the pointer via [`CursorSim`]; the ring stretches along
//! the pointer's velocity. Hover targets scale the ring and add state
//! classes; `[data-cursor]` targets show a text label riding the ring.

use crate::constants::*;
use crate::core::cursor::CursorSim;
use crate::dom;
use crate::frame::RafLoop;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const HOVER_TARGETS: &str = "a, button, .project-card, .service-card, .about-card, .about-fact, \
     .achievement-card, .award-card, .cert-card, .achievement-metric, .metric-card, \
     .pillar-card, .play-item, .case-btn";

pub fn init(document: &web::Document) -> Result<()> {
    let Some(root) = dom::query(document, ".custom-cursor") else {
        return Ok(());
    };
    if dom::coarse_pointer() || dom::viewport_size().0 < CURSOR_MIN_WIDTH {
        return Ok(());
    }
    let (Some(dot), Some(ring)) = (
        dom::query(document, ".cursor-dot"),
        dom::query(document, ".cursor-ring"),
    ) else {
        return Ok(());
    };
    let glow = dom::query(document, ".cursor-glow");
    let label = dom::query(document, ".cursor-label");

    let sim = Rc::new(RefCell::new(CursorSim::new(
        CURSOR_DOT_FOLLOW,
        CURSOR_RING_FOLLOW,
        CURSOR_GLOW_FOLLOW,
        CURSOR_SPEED_MAX,
        CURSOR_STRETCH_X,
        CURSOR_STRETCH_Y,
    )));

    {
        let sim = sim.clone();
        dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
            sim.borrow_mut()
                .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        });
    }

    {
        let sim = sim.clone();
        let glow = glow.clone();
        let label = label.clone();
        let raf = RafLoop::new(move || {
            let mut sim = sim.borrow_mut();
            let ring_tf = sim.step();
            place(&dot, sim.dot.x, sim.dot.y);
            place(&ring, sim.ring.x, sim.ring.y);
            dom::set_style(
                &ring,
                "transform",
                &format!(
                    "translate(-50%, -50%) rotate({:.4}rad) scale({:.4}, {:.4})",
                    ring_tf.angle_rad, ring_tf.scale_x, ring_tf.scale_y
                ),
            );
            if let Some(glow) = &glow {
                place(glow, sim.glow.x, sim.glow.y);
            }
            if let Some(label) = &label {
                place(label, sim.ring.x, sim.ring.y);
            }
        });
        raf.start();
    }

    for el in dom::query_all(document, HOVER_TARGETS) {
        {
            let root = root.clone();
            let sim = sim.clone();
            dom::listen_unit(&el, "mouseenter", move || {
                dom::add_class(&root, "cursor-hover");
                sim.borrow_mut().hover_scale = CURSOR_HOVER_SCALE;
            });
        }
        let root = root.clone();
        let sim = sim.clone();
        dom::listen_unit(&el, "mouseleave", move || {
            dom::remove_class(&root, "cursor-hover");
            sim.borrow_mut().hover_scale = 1.0;
        });
    }

    {
        let root = root.clone();
        dom::listen_unit(document, "mousedown", move || {
            dom::add_class(&root, "cursor-press");
        });
    }
    {
        let root = root.clone();
        dom::listen_unit(document, "mouseup", move || {
            dom::remove_class(&root, "cursor-press");
        });
    }

    // Named hover labels riding the ring.
    for el in dom::query_all(document, "[data-cursor]") {
        let root = root.clone();
        let label = label.clone();
        let target = el.clone();
        dom::listen_unit(&el, "mouseenter", move || {
            if let Some(label) = &label {
                let text = target.get_attribute("data-cursor").unwrap_or_default();
                dom::set_text(label, &text);
                dom::add_class(&root, "cursor-label-active");
            }
        });
        let root = root.clone();
        dom::listen_unit(&el, "mouseleave", move || {
            dom::remove_class(&root, "cursor-label-active");
        });
    }

    for el in dom::query_all(document, "input, textarea") {
        let root = root.clone();
        dom::listen_unit(&el, "mouseenter", move || {
            dom::add_class(&root, "cursor-text");
        });
        let root = root.clone();
        dom::listen_unit(&el, "mouseleave", move || {
            dom::remove_class(&root, "cursor-text");
        });
    }

    // Magnetic targets expose their pull as CSS variables for the styles to
    // consume.
    for el in dom::query_all(document, "[data-magnetic]") {
        let target = el.clone();
        dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left() - rect.width() / 2.0;
            let y = ev.client_y() as f64 - rect.top() - rect.height() / 2.0;
            let s = MAGNETIC_STRENGTH as f64;
            dom::set_style(&target, "--magnetic-x", &format!("{:.2}px", x * s));
            dom::set_style(&target, "--magnetic-y", &format!("{:.2}px", y * s));
        });
        let target = el.clone();
        dom::listen_unit(&el, "mouseleave", move || {
            dom::set_style(&target, "--magnetic-x", "0px");
            dom::set_style(&target, "--magnetic-y", "0px");
        });
    }

    Ok(())
}

fn place(el: &web::Element, x: f32, y: f32) {
    dom::set_style(el, "left", &format!("{x:.2}px"));
    dom::set_style(el, "top", &format!("{y:.2}px"));
}
