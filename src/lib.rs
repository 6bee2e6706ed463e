#![cfg(target_arch = "wasm32")]
//! Interactivity layer for the single-page portfolio site.
//!
//! Boots in two waves: the essentials (scroll driver, cursor, navigation,
//! preloader, section triggers) run immediately, the heavier decorative
//! effects wait for the `load` event plus a short delay so they never
//! compete with first paint.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod effects;
mod frame;
mod net;
mod player;
mod scroll;
mod triggers;

use constants::MODERN_EFFECTS_DELAY_MS;
use scroll::ScrollSource;
use triggers::TriggerRegistry;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let reduced_motion = dom::prefers_reduced_motion();

    let scroll = ScrollSource::new(&document, reduced_motion);
    let registry = TriggerRegistry::new();
    {
        let registry = registry.clone();
        scroll.subscribe(move |offset| registry.update_all(offset));
    }

    // The page is held still until the preloader finishes.
    scroll.stop();

    effects::cursor::init(&document)?;
    effects::audio::init(&document)?;
    effects::hero::init_playground(&document)?;
    effects::nav::init(&document, &scroll)?;
    effects::hover::init(&document)?;
    effects::modal::init(&document)?;
    effects::form::init(&document)?;
    effects::particles::init(&document, reduced_motion)?;
    effects::orbit::place_all(&document);

    let preloader_done = Rc::new(Cell::new(false));
    {
        let doc = document.clone();
        let scroll = scroll.clone();
        let done = preloader_done.clone();
        effects::preloader::run(&document, move || {
            done.set(true);
            scroll.start();
            if let Err(e) = effects::hero::entrance(&doc, reduced_motion) {
                log::error!("hero entrance: {e:?}");
            }
        })?;
    }

    effects::reveal::init(&document, &registry)?;
    effects::sections::init(&document, &registry)?;
    effects::hero::init_parallax(&document, &registry);

    wire_late_wave(&document, &scroll, &registry, reduced_motion);
    wire_resize(&document, &scroll, &registry);
    wire_visibility(&document, &scroll, &preloader_done);

    Ok(())
}

/// Decorative effects deferred past `load`: trails, canvas particle
/// fields, counters, the drifting hero gradient, the certificate
/// lightbox, and (a beat later) the scramble and typewriter titles.
fn late_wave(document: &web::Document, reduced_motion: bool) {
    effects::trail::init(document, reduced_motion);
    if let Err(e) = effects::particles::init_fields(document, reduced_motion) {
        log::error!("particle fields: {e:?}");
    }
    if let Err(e) = effects::counters::init(document) {
        log::error!("counters: {e:?}");
    }
    if let Err(e) = effects::hero::init_gradient(document, reduced_motion) {
        log::error!("hero gradient: {e:?}");
    }
    if let Err(e) = effects::lightbox::init(document) {
        log::error!("lightbox: {e:?}");
    }

    let document = document.clone();
    let _ = frame::set_timeout_ms(
        move || {
            if let Err(e) = effects::scramble::init(&document) {
                log::error!("scramble: {e:?}");
            }
            if let Err(e) = effects::scramble::init_typewriter(&document) {
                log::error!("typewriter: {e:?}");
            }
        },
        1000,
    );
}

fn wire_late_wave(
    document: &web::Document,
    scroll: &ScrollSource,
    registry: &TriggerRegistry,
    reduced_motion: bool,
) {
    let document = document.clone();
    let scroll = scroll.clone();
    let registry = registry.clone();
    let schedule = move || {
        let doc = document.clone();
        let _ = frame::set_timeout_ms(move || late_wave(&doc, reduced_motion), MODERN_EFFECTS_DELAY_MS);

        // Layout has settled by now; zone geometry measured during boot
        // may be stale (fonts, images).
        let registry = registry.clone();
        let scroll = scroll.clone();
        let _ = frame::set_timeout_ms(move || registry.refresh(scroll.offset()), 600);
    };

    // The module may be instantiated after `load` has already fired.
    let already_loaded = dom::window_document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if already_loaded {
        schedule();
    } else if let Some(window) = web::window() {
        let mut schedule = Some(schedule);
        dom::listen_unit(&window, "load", move || {
            if let Some(schedule) = schedule.take() {
                schedule();
            }
        });
    }
}

fn wire_resize(document: &web::Document, scroll: &ScrollSource, registry: &TriggerRegistry) {
    let Some(window) = web::window() else { return };
    let document = document.clone();
    let scroll = scroll.clone();
    let registry = registry.clone();
    let mut on_resize = frame::raf_throttle(move |()| {
        scroll.refresh_bounds(&document);
        registry.refresh(scroll.offset());
        effects::orbit::place_all(&document);
    });
    dom::listen_unit(&window, "resize", move || on_resize(()));
}

fn wire_visibility(document: &web::Document, scroll: &ScrollSource, preloader_done: &Rc<Cell<bool>>) {
    let doc = document.clone();
    let scroll = scroll.clone();
    let done = preloader_done.clone();
    dom::listen_unit(document, "visibilitychange", move || {
        if doc.hidden() {
            scroll.pause();
        } else if done.get() {
            scroll.start();
        }
    });
}
