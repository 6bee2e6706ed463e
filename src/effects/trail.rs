//! Pointer trails: short-lived motes dropped behind the mouse.
//!
//! Two layers run at once. The mote trail spawns at most one element per
//! mouse move (rAF-coalesced), the comet trail keeps its own frame loop
//! alive while the pointer moves and retires it after a short idle gap.
//! Both cap the number of live elements so a fast pointer cannot flood
//! the DOM.

use crate::constants::*;
use crate::dom;
use crate::frame;
use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn elapsed_ms(since: Option<Instant>) -> f64 {
    since.map_or(f64::INFINITY, |t| t.elapsed().as_secs_f64() * 1000.0)
}

/// Drop a trail element at the pointer and schedule its removal.
fn spawn_mote(
    document: &web::Document,
    class: &str,
    x: f64,
    y: f64,
    life_ms: i32,
    live: &Rc<Cell<usize>>,
) {
    let Ok(mote) = document.create_element("div") else {
        return;
    };
    mote.set_class_name(class);
    dom::set_style(&mote, "left", &format!("{x}px"));
    dom::set_style(&mote, "top", &format!("{y}px"));
    let Some(body) = document.body() else {
        return;
    };
    if body.append_child(&mote).is_err() {
        return;
    }

    live.set(live.get() + 1);
    let live = live.clone();
    let _ = frame::set_timeout_ms(
        move || {
            mote.remove();
            live.set(live.get().saturating_sub(1));
        },
        life_ms,
    );
}

fn init_pointer_motes(document: &web::Document) {
    let doc = document.clone();
    let live = Rc::new(Cell::new(0usize));
    let last_spawn = Cell::new(None::<Instant>);

    let mut spawn = frame::raf_throttle(move |(x, y): (f64, f64)| {
        if live.get() < TRAIL_MAX_MOTES && elapsed_ms(last_spawn.get()) >= TRAIL_SPAWN_GAP_MS {
            spawn_mote(&doc, "particle-trail", x, y, TRAIL_LIFE_MS, &live);
            last_spawn.set(Some(Instant::now()));
        }
    });

    let target: web::EventTarget = document.clone().into();
    dom::listen(&target, "mousemove", move |event: web::MouseEvent| {
        spawn((event.client_x() as f64, event.client_y() as f64));
    });
}

fn init_comet(document: &web::Document) {
    let doc = document.clone();
    let live = Rc::new(Cell::new(0usize));
    let pos = Rc::new(Cell::new((0.0f64, 0.0f64)));
    let active = Rc::new(Cell::new(false));
    let idle = Rc::new(Cell::new(None::<i32>));

    let target: web::EventTarget = document.clone().into();
    dom::listen(&target, "mousemove", move |event: web::MouseEvent| {
        pos.set((event.client_x() as f64, event.client_y() as f64));

        if !active.get() {
            active.set(true);
            let doc = doc.clone();
            let live = live.clone();
            let pos = pos.clone();
            let running = active.clone();
            let last_spawn = Cell::new(None::<Instant>);
            frame::run_while(move || {
                if !running.get() {
                    return false;
                }
                if live.get() < COMET_MAX_MOTES && elapsed_ms(last_spawn.get()) >= COMET_SPAWN_GAP_MS
                {
                    let (x, y) = pos.get();
                    spawn_mote(&doc, "cursor-trail", x, y, COMET_LIFE_MS, &live);
                    last_spawn.set(Some(Instant::now()));
                }
                true
            });
        }

        if let Some(id) = idle.take() {
            frame::clear_timeout(id);
        }
        let stop = active.clone();
        idle.set(frame::set_timeout_ms(move || stop.set(false), COMET_IDLE_MS));
    });
}

pub fn init(document: &web::Document, reduced_motion: bool) {
    if reduced_motion || dom::coarse_pointer() {
        return;
    }
    init_pointer_motes(document);
    init_comet(document);
}
