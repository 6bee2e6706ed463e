//! Hero section: entrance sequence, pointer playground, gradient drift,
//! and scroll parallax.

use crate::constants::*;
use crate::core::cursor::PointerDrift;
use crate::core::ease;
use crate::core::timeline::{At, Timeline};
use crate::dom;
use crate::frame::{self, RafLoop};
use crate::player::{Channel, Player};
use crate::triggers::{TriggerHooks, TriggerRegistry};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Entrance timeline, played once the preloader completes.
pub fn entrance(document: &web::Document, reduced_motion: bool) -> Result<()> {
    if reduced_motion {
        settle(document);
        return Ok(());
    }

    let mut player = Player::builder();
    let mut tl = Timeline::new();
    tl.hold(0.2);

    if let Some(kicker) = dom::query(document, ".hero-kicker") {
        let o = player.track(&kicker, Channel::Opacity);
        let y = player.track(&kicker, Channel::Y);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::End);
        tl.add(y, 30.0, 0.0, 1.0, ease::quart_out, At::WithPrev);
    }
    let words = dom::query_all(document, ".hero-title .title-word");
    if !words.is_empty() {
        let base = player.track_all(&words, Channel::YPct);
        tl.add_stagger(
            base,
            words.len(),
            100.0,
            0.0,
            1.2,
            0.1,
            ease::quart_out,
            At::EndOffset(-0.6),
        );
    }
    fade_up(document, &mut player, &mut tl, ".hero-description", 30.0, 1.0, At::EndOffset(-0.8));
    fade_up(document, &mut player, &mut tl, ".hero-actions", 30.0, 1.0, At::EndOffset(-0.6));
    fade_up(document, &mut player, &mut tl, ".hero-playground", 20.0, 1.0, At::EndOffset(-0.6));
    let items = dom::query_all(document, ".play-item");
    if !items.is_empty() {
        let o = player.track_all(&items, Channel::Opacity);
        let y = player.track_all(&items, Channel::Y);
        tl.add_stagger(o, items.len(), 0.0, 1.0, 0.8, 0.08, ease::quart_out, At::EndOffset(-0.4));
        tl.add_stagger(y, items.len(), 12.0, 0.0, 0.8, 0.08, ease::quart_out, At::WithPrev);
    }
    fade_up(document, &mut player, &mut tl, ".audio-pill", 20.0, 0.8, At::EndOffset(-0.4));
    if let Some(el) = dom::query(document, ".hero-scroll") {
        let o = player.track(&el, Channel::Opacity);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::EndOffset(-0.4));
    }
    if let Some(el) = dom::query(document, ".decoration-circle") {
        let o = player.track(&el, Channel::Opacity);
        let s = player.track(&el, Channel::Scale);
        tl.add(o, 0.0, 0.3, 1.5, ease::quad_out, At::EndOffset(-1.0));
        tl.add(s, 0.8, 1.0, 1.5, ease::quad_out, At::WithPrev);
    }
    if let Some(el) = dom::query(document, ".decoration-dots") {
        let o = player.track(&el, Channel::Opacity);
        tl.add(o, 0.0, 0.5, 1.0, ease::quart_out, At::EndOffset(-1.0));
    }

    player.set_timeline(tl);
    player.play();

    // Failsafe: if the title words never became visible (styles failed to
    // load, timeline interrupted), force them on.
    let document = document.clone();
    frame::set_timeout_ms(move || ensure_title_visible(&document), 1600);
    Ok(())
}

fn fade_up(
    document: &web::Document,
    player: &mut Player,
    tl: &mut Timeline,
    sel: &str,
    rise: f64,
    duration: f64,
    at: At,
) {
    if let Some(el) = dom::query(document, sel) {
        let o = player.track(&el, Channel::Opacity);
        let y = player.track(&el, Channel::Y);
        tl.add(o, 0.0, 1.0, duration, ease::quart_out, at);
        tl.add(y, rise, 0.0, duration, ease::quart_out, At::WithPrev);
    }
}

/// Final-state styles for reduced motion: no playback, content readable.
fn settle(document: &web::Document) {
    for sel in [
        ".hero-kicker",
        ".hero-description",
        ".hero-actions",
        ".hero-playground",
        ".audio-pill",
        ".hero-scroll",
    ] {
        if let Some(el) = dom::query(document, sel) {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "none");
        }
    }
    for el in dom::query_all(document, ".hero-title .title-word, .play-item") {
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transform", "none");
    }
}

fn ensure_title_visible(document: &web::Document) {
    let words = dom::query_all(document, ".hero-title .title-word");
    if words.is_empty() {
        return;
    }
    let visible = words.iter().any(|el| {
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let opacity = web::window()
            .and_then(|w| w.get_computed_style(el).ok().flatten())
            .and_then(|s| s.get_property_value("opacity").ok())
            .unwrap_or_default();
        opacity != "0"
    });
    if visible {
        return;
    }
    log::warn!("hero title invisible after entrance; forcing visible");
    if let Some(body) = document.body() {
        dom::add_class(&body, "hero-title-force");
    }
    for el in &words {
        dom::set_style(el, "transform", "translateY(0)");
        dom::set_style(el, "opacity", "1");
    }
}

/// Pointer parallax over the playground: the orb and each `data-depth` item
/// trail the pointer offset.
pub fn init_playground(document: &web::Document) -> Result<()> {
    if dom::coarse_pointer() {
        return Ok(());
    }
    let Some(playground) = dom::query(document, ".hero-playground") else {
        return Ok(());
    };
    let orb = dom::query(document, ".hero-playground .playground-orb");
    let items = dom::query_all(document, ".hero-playground .play-item");

    let drift = Rc::new(RefCell::new(PointerDrift::new(
        PLAYGROUND_FOLLOW,
        PLAYGROUND_RANGE_PX,
    )));

    {
        let drift = drift.clone();
        let region = playground.clone();
        dom::listen(&playground, "mousemove", move |ev: web::MouseEvent| {
            let rect = region.get_bounding_client_rect();
            let u = (ev.client_x() as f64 - rect.left() - rect.width() / 2.0) / rect.width();
            let v = (ev.client_y() as f64 - rect.top() - rect.height() / 2.0) / rect.height();
            drift.borrow_mut().set_pointer_uv(u as f32, v as f32);
        });
    }
    {
        let drift = drift.clone();
        dom::listen_unit(&playground, "mouseleave", move || {
            drift.borrow_mut().clear();
        });
    }

    let depths: Vec<f32> = items
        .iter()
        .map(|el| {
            el.get_attribute("data-depth")
                .and_then(|d| d.parse().ok())
                .unwrap_or(1.0)
        })
        .collect();
    let raf = RafLoop::new(move || {
        let pos = drift.borrow_mut().step();
        if let Some(orb) = &orb {
            dom::set_style(
                orb,
                "transform",
                &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y),
            );
        }
        for (el, depth) in items.iter().zip(&depths) {
            dom::set_style(
                el,
                "transform",
                &format!("translate({:.2}px, {:.2}px)", pos.x * depth, pos.y * depth),
            );
        }
    });
    raf.start();
    Ok(())
}

/// The hero gradient drifts toward the pointer while the hero is on screen.
pub fn init_gradient(document: &web::Document, reduced_motion: bool) -> Result<()> {
    if reduced_motion {
        return Ok(());
    }
    let Some(hero) = dom::query(document, ".hero") else {
        return Ok(());
    };
    let Some(gradient) = dom::query(document, ".hero-gradient") else {
        return Ok(());
    };

    let drift = Rc::new(RefCell::new(PointerDrift::new(
        GRADIENT_FOLLOW,
        GRADIENT_RANGE_PX,
    )));

    {
        let drift = drift.clone();
        let region = hero.clone();
        dom::listen(&hero, "mousemove", move |ev: web::MouseEvent| {
            let rect = region.get_bounding_client_rect();
            let u = (ev.client_x() as f64 - rect.left()) / rect.width() - 0.5;
            let v = (ev.client_y() as f64 - rect.top()) / rect.height() - 0.5;
            drift.borrow_mut().set_pointer_uv(u as f32, v as f32);
        });
    }

    let raf = RafLoop::new(move || {
        let pos = drift.borrow_mut().step();
        dom::set_style(
            &gradient,
            "transform",
            &format!("translate({:.2}px, {:.2}px)", pos.x, pos.y),
        );
    });
    let raf_bind = raf.clone();
    dom::observe_visibility(&hero, "200px 0px", None, move |on_screen| {
        if on_screen {
            raf_bind.start();
        } else {
            raf_bind.stop();
        }
    });
    raf.start();
    Ok(())
}

/// Scrub zones: the hero content sinks and fades while the background layer
/// rises as the hero scrolls out.
pub fn init_parallax(document: &web::Document, registry: &TriggerRegistry) {
    use crate::core::trigger::ZoneConfig;

    let Some(hero) = dom::query(document, ".hero") else {
        return;
    };
    if let Some(content) = dom::query(document, ".hero-content") {
        registry.add(
            &hero,
            ZoneConfig::toggling(0.0, 0.0),
            TriggerHooks::progress(move |p| {
                dom::set_style(&content, "transform", &format!("translateY({:.2}px)", 100.0 * p));
                dom::set_style(&content, "opacity", &format!("{:.4}", 1.0 - 0.5 * p));
            }),
        );
    }
    if let Some(bg) = dom::query(document, ".hero-bg") {
        registry.add(
            &hero,
            ZoneConfig::toggling(0.0, 0.0),
            TriggerHooks::progress(move |p| {
                dom::set_style(&bg, "transform", &format!("translateY({:.2}px)", -100.0 * p));
            }),
        );
    }
}
