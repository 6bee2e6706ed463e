//! Per-section entrance timelines and scrub effects.

use crate::core::ease;
use crate::core::timeline::{At, Timeline};
use crate::core::trigger::ZoneConfig;
use crate::dom;
use crate::effects::reveal::play_on_enter;
use crate::player::{Channel, Player};
use crate::triggers::{TriggerHooks, TriggerRegistry};
use anyhow::Result;
use web_sys as web;

pub fn init(document: &web::Document, registry: &TriggerRegistry) -> Result<()> {
    init_about(document, registry);
    init_experience(document, registry);
    init_skills(document, registry);
    init_projects(document, registry);
    init_trimatic(document, registry);
    init_achievements(document, registry);
    init_contact_intro(document, registry);
    init_beyond(document, registry);
    init_education(document, registry);
    Ok(())
}

/// About: the body text splits into word spans revealed by scrub, the fact
/// cards cascade in, and the portrait layers drift at different rates.
fn init_about(document: &web::Document, registry: &TriggerRegistry) {
    if let Some(text) = dom::by_id(document, "about-text") {
        let raw = text.text_content().unwrap_or_default();
        let words: Vec<&str> = raw.split_whitespace().collect();
        let html = words
            .iter()
            .map(|w| format!("<span class=\"word\">{w}</span>"))
            .collect::<Vec<_>>()
            .join(" ");
        dom::set_html(&text, &html);

        let spans = dom::query_all_scoped(&text, ".word");
        if let Some(about) = dom::query(document, ".about") {
            let n = spans.len() as f64;
            registry.add(
                &about,
                ZoneConfig::toggling(0.6, 0.5),
                TriggerHooks::progress(move |p| {
                    for (i, word) in spans.iter().enumerate() {
                        let o = (p * n - i as f64).clamp(0.0, 1.0);
                        dom::set_style(word, "opacity", &format!("{o:.3}"));
                    }
                }),
            );
        }
    }

    let facts = dom::query_all(document, ".about-fact");
    if let Some(grid) = dom::query(document, ".about-facts") {
        if !facts.is_empty() {
            let mut player = Player::builder();
            let mut tl = Timeline::new();
            let y = player.track_all(&facts, Channel::Y);
            let o = player.track_all(&facts, Channel::Opacity);
            tl.add_stagger(y, facts.len(), 40.0, 0.0, 1.0, 0.15, ease::quart_out, At::End);
            tl.add_stagger(o, facts.len(), 0.0, 1.0, 1.0, 0.15, ease::quart_out, At::WithPrev);
            player.set_timeline(tl);
            play_on_enter(registry, &grid, 0.8, player);
        }
    }

    if let Some(portrait) = dom::query(document, ".about-portrait") {
        let layers = dom::query_all(document, ".portrait-layer");
        for (i, layer) in layers.into_iter().enumerate() {
            let depth = -20.0 - 10.0 * i as f64;
            registry.add(
                &portrait,
                ZoneConfig::toggling(0.8, 0.0),
                TriggerHooks::progress(move |p| {
                    dom::set_style(&layer, "transform", &format!("translateY({:.2}px)", depth * p));
                }),
            );
        }
    }
}

fn init_experience(document: &web::Document, registry: &TriggerRegistry) {
    for item in dom::query_all(document, ".timeline-item") {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let x = player.track(&item, Channel::X);
        let o = player.track(&item, Channel::Opacity);
        tl.add(x, -50.0, 0.0, 1.0, ease::quart_out, At::End);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &item, 0.8, player);
    }
}

fn init_skills(document: &web::Document, registry: &TriggerRegistry) {
    let Some(constellation) = dom::query(document, ".skills-constellation") else {
        return;
    };
    if let Some(core) = dom::query(document, ".constellation-core") {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let s = player.track(&core, Channel::Scale);
        let o = player.track(&core, Channel::Opacity);
        tl.add(s, 0.9, 1.0, 0.9, ease::quart_out, At::End);
        tl.add(o, 0.0, 1.0, 0.9, ease::quart_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &constellation, 0.75, player);
    }
    let orbits = dom::query_all(document, ".orbit");
    if !orbits.is_empty() {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let s = player.track_all(&orbits, Channel::Scale);
        let o = player.track_all(&orbits, Channel::Opacity);
        tl.add_stagger(s, orbits.len(), 0.95, 1.0, 1.0, 0.1, ease::quart_out, At::End);
        tl.add_stagger(o, orbits.len(), 0.0, 1.0, 1.0, 0.1, ease::quart_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &constellation, 0.7, player);
    }
}

fn init_projects(document: &web::Document, registry: &TriggerRegistry) {
    let Some(grid) = dom::query(document, ".projects-grid") else {
        return;
    };
    let cards = dom::query_all(document, ".project-card");
    if cards.is_empty() {
        return;
    }
    let mut player = Player::builder();
    let mut tl = Timeline::new();
    let y = player.track_all(&cards, Channel::Y);
    let o = player.track_all(&cards, Channel::Opacity);
    let s = player.track_all(&cards, Channel::Scale);
    tl.add_stagger(y, cards.len(), 100.0, 0.0, 1.0, 0.2, ease::quart_out, At::End);
    tl.add_stagger(o, cards.len(), 0.0, 1.0, 1.0, 0.2, ease::quart_out, At::WithPrev);
    tl.add_stagger(s, cards.len(), 0.95, 1.0, 1.0, 0.2, ease::quart_out, At::WithPrev);
    player.set_timeline(tl);
    play_on_enter(registry, &grid, 0.75, player);
}

fn init_trimatic(document: &web::Document, registry: &TriggerRegistry) {
    let Some(section) = dom::query(document, ".trimatic") else {
        return;
    };
    let mut player = Player::builder();
    let mut tl = Timeline::new();
    if let Some(header) = dom::query(document, ".trimatic-header") {
        let y = player.track(&header, Channel::Y);
        let o = player.track(&header, Channel::Opacity);
        tl.add(y, 50.0, 0.0, 1.0, ease::quart_out, At::End);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::WithPrev);
    }
    if let Some(intro) = dom::query(document, ".trimatic-intro") {
        let y = player.track(&intro, Channel::Y);
        let o = player.track(&intro, Channel::Opacity);
        tl.add(y, 30.0, 0.0, 0.8, ease::quart_out, At::EndOffset(-0.5));
        tl.add(o, 0.0, 1.0, 0.8, ease::quart_out, At::WithPrev);
    }
    let cards = dom::query_all(document, ".service-card");
    if !cards.is_empty() {
        let y = player.track_all(&cards, Channel::Y);
        let o = player.track_all(&cards, Channel::Opacity);
        let s = player.track_all(&cards, Channel::Scale);
        tl.add_stagger(y, cards.len(), 60.0, 0.0, 0.8, 0.15, ease::quart_out, At::EndOffset(-0.4));
        tl.add_stagger(o, cards.len(), 0.0, 1.0, 0.8, 0.15, ease::quart_out, At::WithPrev);
        tl.add_stagger(s, cards.len(), 0.95, 1.0, 0.8, 0.15, ease::quart_out, At::WithPrev);
    }
    if let Some(cta) = dom::query(document, ".trimatic-cta") {
        let y = player.track(&cta, Channel::Y);
        let o = player.track(&cta, Channel::Opacity);
        tl.add(y, 30.0, 0.0, 0.8, ease::quart_out, At::EndOffset(-0.3));
        tl.add(o, 0.0, 1.0, 0.8, ease::quart_out, At::WithPrev);
    }
    player.set_timeline(tl);
    play_on_enter(registry, &section, 0.7, player);
}

fn init_achievements(document: &web::Document, registry: &TriggerRegistry) {
    let awards = dom::query_all(document, ".award-item");
    if let Some(track) = dom::query(document, ".award-timeline") {
        if !awards.is_empty() {
            let mut player = Player::builder();
            let mut tl = Timeline::new();
            let y = player.track_all(&awards, Channel::Y);
            let o = player.track_all(&awards, Channel::Opacity);
            tl.add_stagger(y, awards.len(), 30.0, 0.0, 0.9, 0.15, ease::quart_out, At::End);
            tl.add_stagger(o, awards.len(), 0.0, 1.0, 0.9, 0.15, ease::quart_out, At::WithPrev);
            player.set_timeline(tl);
            play_on_enter(registry, &track, 0.75, player);
        }
    }
    let certs = dom::query_all(document, ".cert-card");
    if let Some(column) = dom::query(document, ".cert-column") {
        if !certs.is_empty() {
            let mut player = Player::builder();
            let mut tl = Timeline::new();
            let y = player.track_all(&certs, Channel::Y);
            let o = player.track_all(&certs, Channel::Opacity);
            tl.add_stagger(y, certs.len(), 30.0, 0.0, 0.9, 0.15, ease::quart_out, At::End);
            tl.add_stagger(o, certs.len(), 0.0, 1.0, 0.9, 0.15, ease::quart_out, At::WithPrev);
            player.set_timeline(tl);
            play_on_enter(registry, &column, 0.75, player);
        }
    }
}

fn init_contact_intro(document: &web::Document, registry: &TriggerRegistry) {
    let Some(section) = dom::query(document, ".contact") else {
        return;
    };
    let mut player = Player::builder();
    let mut tl = Timeline::new();
    if let Some(header) = dom::query(document, ".contact-header") {
        let y = player.track(&header, Channel::Y);
        let o = player.track(&header, Channel::Opacity);
        tl.add(y, 50.0, 0.0, 1.0, ease::quart_out, At::End);
        tl.add(o, 0.0, 1.0, 1.0, ease::quart_out, At::WithPrev);
    }
    if let Some(info) = dom::query(document, ".contact-info") {
        let x = player.track(&info, Channel::X);
        let o = player.track(&info, Channel::Opacity);
        tl.add(x, -50.0, 0.0, 0.8, ease::quart_out, At::EndOffset(-0.5));
        tl.add(o, 0.0, 1.0, 0.8, ease::quart_out, At::WithPrev);
    }
    if let Some(form) = dom::query(document, ".contact-form") {
        let x = player.track(&form, Channel::X);
        let o = player.track(&form, Channel::Opacity);
        tl.add(x, 50.0, 0.0, 0.8, ease::quart_out, At::EndOffset(-0.6));
        tl.add(o, 0.0, 1.0, 0.8, ease::quart_out, At::WithPrev);
    }
    player.set_timeline(tl);
    play_on_enter(registry, &section, 0.7, player);
}

/// Beyond section: split headline characters sweep in, supporting blocks
/// fade up, and the orb drifts against the scroll.
fn init_beyond(document: &web::Document, registry: &TriggerRegistry) {
    let Some(beyond) = dom::query(document, ".beyond-logic") else {
        return;
    };

    for target in dom::query_all_scoped(&beyond, "[data-split]") {
        let raw = target.text_content().unwrap_or_default();
        let html = raw
            .trim()
            .chars()
            .map(|c| {
                if c == ' ' {
                    "<span class=\"title-char\">&nbsp;</span>".to_string()
                } else {
                    format!("<span class=\"title-char\">{c}</span>")
                }
            })
            .collect::<String>();
        dom::set_html(&target, &html);
    }

    let chars = dom::query_all_scoped(&beyond, ".title-char");
    if !chars.is_empty() {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let o = player.track_all(&chars, Channel::Opacity);
        let y = player.track_all(&chars, Channel::Y);
        let rx = player.track_all(&chars, Channel::RotateX);
        tl.add_stagger(o, chars.len(), 0.0, 1.0, 0.8, 0.05, ease::quart_out, At::End);
        tl.add_stagger(y, chars.len(), 20.0, 0.0, 0.8, 0.05, ease::quart_out, At::WithPrev);
        tl.add_stagger(rx, chars.len(), -90.0, 0.0, 0.8, 0.05, ease::quart_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &beyond, 0.7, player);
    }

    let mut fade_block = |sel: &str, rise: f64, scale: Option<f64>, frac: f64, duration: f64| {
        if let Some(el) = dom::query(document, sel) {
            let mut player = Player::builder();
            let mut tl = Timeline::new();
            let o = player.track(&el, Channel::Opacity);
            tl.add(o, 0.0, 1.0, duration, ease::quart_out, At::End);
            if let Some(from) = scale {
                let s = player.track(&el, Channel::Scale);
                tl.add(s, from, 1.0, duration, ease::quart_out, At::WithPrev);
            } else {
                let y = player.track(&el, Channel::Y);
                tl.add(y, rise, 0.0, duration, ease::quart_out, At::WithPrev);
            }
            player.set_timeline(tl);
            play_on_enter(registry, &el, frac, player);
        }
    };
    fade_block(".beyond-quote", 30.0, None, 0.8, 1.0);
    fade_block(".beyond-metrics", 0.0, Some(0.95), 0.85, 0.8);
    fade_block(".beyond-cta", 20.0, None, 0.9, 0.8);

    if let Some(orb) = dom::query_scoped(&beyond, ".beyond-orb") {
        registry.add(
            &beyond,
            ZoneConfig::toggling(1.0, 0.0),
            TriggerHooks::progress(move |p| {
                dom::set_style(&orb, "transform", &format!("translateY({:.2}px)", -100.0 * p));
            }),
        );
    }
}

/// Education journey: the path draws and the rocket rides it with scroll,
/// then the stops cascade in.
fn init_education(document: &web::Document, registry: &TriggerRegistry) {
    let Some(track) = dom::query(document, ".timeline-track") else {
        return;
    };

    if let Some(path) = dom::query(document, ".journey-path") {
        dom::set_style(&path, "transform-origin", "left center");
        dom::set_style(&path, "transform", "scaleX(0)");
    }
    if let Some(rocket) = dom::query(document, ".rocket-ship") {
        dom::set_style(&rocket, "left", "5%");
    }

    if let Some(section) = dom::query(document, ".education-journey-section") {
        let path = dom::query(document, ".journey-path");
        let rocket = dom::query(document, ".rocket-ship");
        registry.add(
            &section,
            ZoneConfig::toggling(0.45, 0.5),
            TriggerHooks::progress(move |p| {
                if let Some(path) = &path {
                    dom::set_style(path, "transform", &format!("scaleX({p:.4})"));
                }
                if let Some(rocket) = &rocket {
                    dom::set_style(rocket, "left", &format!("{:.3}%", 5.0 + 90.0 * p));
                    dom::set_style(rocket, "transform", &format!("rotate({:.2}deg)", 5.0 * p));
                }
            }),
        );
    }

    let stops = dom::query_all(document, ".timeline-stop");
    if !stops.is_empty() {
        let mut player = Player::builder();
        let mut tl = Timeline::new();
        let y = player.track_all(&stops, Channel::Y);
        let o = player.track_all(&stops, Channel::Opacity);
        tl.add_stagger(y, stops.len(), 30.0, 0.0, 0.6, 0.2, ease::cubic_out, At::End);
        tl.add_stagger(o, stops.len(), 0.0, 1.0, 0.6, 0.2, ease::cubic_out, At::WithPrev);
        player.set_timeline(tl);
        play_on_enter(registry, &track, 0.65, player);
    }
}
