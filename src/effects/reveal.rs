//! Generic scroll reveals: section headers, section transform classes, blur
//! reveal, viewport-entry reveals, sliding text rows, and whole-section
//! fades.

use crate::core::ease;
use crate::core::timeline::{At, Timeline};
use crate::core::trigger::ZoneConfig;
use crate::dom;
use crate::player::{Channel, Player};
use crate::triggers::{TriggerHooks, TriggerRegistry};
use anyhow::Result;
use web_sys as web;

/// Arm a built player to run once when the zone is first entered.
pub fn play_on_enter(
    registry: &TriggerRegistry,
    trigger: &web::Element,
    start_frac: f64,
    player: Player,
) {
    let mut slot = Some(player);
    registry.add(
        trigger,
        ZoneConfig::once_at(start_frac),
        TriggerHooks::enter(move || {
            if let Some(p) = slot.take() {
                p.play();
            }
        }),
    );
}

pub fn init(document: &web::Document, registry: &TriggerRegistry) -> Result<()> {
    init_section_headers(document, registry);
    init_section_transforms(document, registry);
    init_blur_reveal(document, registry);
    init_smooth_reveal(document);
    init_sliding_text(document, registry);
    init_section_fades(document, registry);
    Ok(())
}

/// Number, label, and title of each section header cascade in on entry.
fn init_section_headers(document: &web::Document, registry: &TriggerRegistry) {
    for header in dom::query_all(document, ".section-header, .contact-header") {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        if let Some(number) = dom::query_scoped(&header, ".section-number") {
            let o = player.track(&number, Channel::Opacity);
            let x = player.track(&number, Channel::X);
            tl.add(o, 0.0, 1.0, 0.6, ease::quart_out, At::End);
            tl.add(x, -20.0, 0.0, 0.6, ease::quart_out, At::WithPrev);
        }
        if let Some(label) = dom::query_scoped(&header, ".section-label") {
            let o = player.track(&label, Channel::Opacity);
            let y = player.track(&label, Channel::Y);
            tl.add(o, 0.0, 1.0, 0.6, ease::quart_out, At::EndOffset(-0.3));
            tl.add(y, 20.0, 0.0, 0.6, ease::quart_out, At::WithPrev);
        }
        if let Some(title) = dom::query_scoped(&header, ".section-title, .contact-title") {
            let o = player.track(&title, Channel::Opacity);
            let y = player.track(&title, Channel::Y);
            tl.add(o, 0.0, 1.0, 0.8, ease::quart_out, At::EndOffset(-0.4));
            tl.add(y, 50.0, 0.0, 0.8, ease::quart_out, At::WithPrev);
        }
        player.set_timeline(tl);
        play_on_enter(registry, &header, 0.8, player);
    }
}

const TRANSFORM_SECTIONS: &str =
    ".about, .experience, .skills, .projects, .trimatic, .achievements, .beyond-logic, .contact";

/// Each major section carries an `in-view` class while near the viewport;
/// the styles animate off it.
fn init_section_transforms(document: &web::Document, registry: &TriggerRegistry) {
    for section in dom::query_all(document, TRANSFORM_SECTIONS) {
        dom::add_class(&section, "section-transform");
        let target = section.clone();
        let hooks = TriggerHooks::enter({
            let target = target.clone();
            move || dom::add_class(&target, "in-view")
        })
        .with_leave(move || dom::remove_class(&target, "in-view"));
        registry.add(&section, ZoneConfig::toggling(0.9, 0.0), hooks);
    }
}

fn init_blur_reveal(document: &web::Document, registry: &TriggerRegistry) {
    let Some(text) = dom::query(document, ".about-text") else {
        return;
    };
    dom::add_class(&text, "blur-reveal");
    let target = text.clone();
    let hooks = TriggerHooks::enter({
        let target = target.clone();
        move || dom::add_class(&target, "revealed")
    })
    .with_leave(move || dom::remove_class(&target, "revealed"));
    registry.add(&text, ZoneConfig::toggling(0.8, 0.0), hooks);
}

/// Viewport-entry reveal driven by an IntersectionObserver rather than the
/// scroll stream, so it works for content whose layout shifts.
fn init_smooth_reveal(document: &web::Document) {
    let targets = dom::query_all(
        document,
        ".smooth-reveal, .about-text, .about-fact, .timeline-item, .award-item",
    );
    for el in targets {
        dom::add_class(&el, "smooth-reveal");
        let target = el.clone();
        dom::observe_visibility(&el, "0px 0px -100px 0px", Some(0.15), move |on_screen| {
            if on_screen {
                dom::add_class(&target, "revealed");
            }
        });
    }
}

/// Marquee rows slide horizontally with scroll, direction and span set per
/// row.
fn init_sliding_text(document: &web::Document, registry: &TriggerRegistry) {
    let Some(section) = dom::query(document, ".sliding-text-section") else {
        return;
    };
    for row in dom::query_all(document, ".text-row") {
        let rightward = row.get_attribute("data-direction").as_deref() == Some("right");
        let (from, to) = if rightward { (-200.0, 300.0) } else { (0.0, -300.0) };
        dom::set_style(&row, "transform", &format!("translateX({from}px)"));
        let target = row.clone();
        registry.add(
            &section,
            ZoneConfig::toggling(1.0, 0.0),
            TriggerHooks::progress(move |p| {
                let x = from + (to - from) * p;
                dom::set_style(&target, "transform", &format!("translateX({x:.2}px)"));
            }),
        );
    }
}

/// Whole sections fade up on first entry, except the ones with their own
/// entrance timelines.
fn init_section_fades(document: &web::Document, registry: &TriggerRegistry) {
    for section in dom::query_all(document, "section") {
        if dom::has_class(&section, "projects") || dom::has_class(&section, "trimatic") {
            continue;
        }
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let o = player.track(&section, Channel::Opacity);
        let y = player.track(&section, Channel::Y);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::End);
        tl.add(y, 50.0, 0.0, 1.0, ease::quart_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &section, 0.8, player);
    }
}
