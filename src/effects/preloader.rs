//! Preloader overlay sequence.
//!
//! A percentage counter ramps 0-100 while the intro titles and rule line
//! play in, hold, play out, and the two background panels split vertically.
//! A completion mark slightly before the panels finish reveals the main
//! content and hands control to the caller.

use crate::constants::PRELOAD_COUNT_DURATION_SEC;
use crate::core::ease;
use crate::core::timeline::{At, Timeline};
use crate::dom;
use crate::frame;
use crate::player::{Channel, Player};
use anyhow::Result;
use instant::Instant;
use web_sys as web;

const MARK_COMPLETE: usize = 0;

pub fn run(document: &web::Document, on_complete: impl FnOnce() + 'static) -> Result<()> {
    let preloader = dom::by_id(document, "preloader");
    let counter = dom::by_id(document, "counter");
    let titles = dom::query_all(document, ".preloader-title");
    let line = dom::query(document, ".preloader-line");
    let corners = dom::query_all(document, ".corner-info, .corner-counter");
    let bg_top = dom::query(document, ".preloader-bg-top");
    let bg_bottom = dom::query(document, ".preloader-bg-bottom");
    let main = dom::by_id(document, "main");

    if let Some(counter) = counter {
        run_counter(counter);
    }

    let mut player = Player::builder();
    let mut tl = Timeline::new();

    let corners_fade = (!corners.is_empty()).then(|| player.track_all(&corners, Channel::Opacity));
    if let Some(base) = corners_fade {
        tl.add_stagger(base, corners.len(), 0.0, 1.0, 0.6, 0.1, ease::quart_out, At::End);
    }
    if !titles.is_empty() {
        let base = player.track_all(&titles, Channel::YPct);
        tl.add_stagger(
            base,
            titles.len(),
            100.0,
            0.0,
            1.2,
            0.15,
            ease::quart_out,
            At::Abs(0.3),
        );
    }
    let line_scale = line.as_ref().map(|line| player.track(line, Channel::ScaleX));
    if let Some(track) = line_scale {
        tl.add(track, 0.0, 1.0, 0.8, ease::quad_in_out, At::Abs(0.6));
    }

    tl.hold(0.8);

    if !titles.is_empty() {
        let y = player.track_all(&titles, Channel::Y);
        let fade = player.track_all(&titles, Channel::Opacity);
        tl.add_stagger(y, titles.len(), 0.0, -100.0, 0.6, 0.1, ease::quart_out, At::End);
        tl.add_stagger(
            fade,
            titles.len(),
            1.0,
            0.0,
            0.6,
            0.1,
            ease::quart_out,
            At::WithPrev,
        );
    }
    // The exits drive the same tracks the entrances set up.
    if let Some(track) = line_scale {
        tl.add(track, 1.0, 0.0, 0.4, ease::quart_out, At::EndOffset(-0.4));
    }
    if let Some(base) = corners_fade {
        tl.add_stagger(
            base,
            corners.len(),
            1.0,
            0.0,
            0.3,
            0.0,
            ease::quart_out,
            At::EndOffset(-0.3),
        );
    }
    if let Some(top) = &bg_top {
        let track = player.track(top, Channel::YPct);
        tl.add(track, 0.0, -100.0, 1.0, ease::quart_in_out, At::EndOffset(-0.2));
    }
    if let Some(bottom) = &bg_bottom {
        let track = player.track(bottom, Channel::YPct);
        tl.add(track, 0.0, 100.0, 1.0, ease::quart_in_out, At::WithPrev);
    }
    tl.mark(MARK_COMPLETE, At::EndOffset(-0.5));

    player.set_timeline(tl);
    let mut on_complete = Some(on_complete);
    player.on_mark(MARK_COMPLETE, move || {
        if let Some(main) = &main {
            dom::add_class(main, "visible");
        }
        if let Some(preloader) = &preloader {
            dom::add_class(preloader, "hidden");
        }
        if let Some(f) = on_complete.take() {
            f();
        }
    });
    player.play();
    Ok(())
}

/// 0-100 ramp rendered zero-padded to three digits.
fn run_counter(counter: web::Element) {
    let started = Instant::now();
    frame::run_while(move || {
        let t = (started.elapsed().as_secs_f64() / PRELOAD_COUNT_DURATION_SEC).min(1.0);
        let value = (100.0 * ease::quad_in_out(t)).floor() as u32;
        dom::set_text(&counter, &format!("{value:03}"));
        t < 1.0
    });
}
