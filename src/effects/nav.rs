//! Navigation chrome: navbar state, mobile menu, anchor links, back-to-top,
//! and the scroll progress bar.

use crate::constants::*;
use crate::core::ease;
use crate::core::timeline::{At, Timeline};
use crate::dom;
use crate::player::{Channel, Player};
use crate::scroll::ScrollSource;
use anyhow::Result;
use web_sys as web;

pub fn init(document: &web::Document, scroll: &ScrollSource) -> Result<()> {
    init_navbar(document, scroll);
    init_mobile_menu(document, scroll);
    init_anchor_links(document, scroll);
    init_back_to_top(document, scroll);
    init_progress_bar(document, scroll);
    Ok(())
}

fn init_navbar(document: &web::Document, scroll: &ScrollSource) {
    let Some(navbar) = dom::by_id(document, "navbar") else {
        return;
    };
    scroll.subscribe(move |offset| {
        if offset > NAVBAR_SCROLLED_AT {
            dom::add_class(&navbar, "scrolled");
        } else {
            dom::remove_class(&navbar, "scrolled");
        }
    });
}

fn init_mobile_menu(document: &web::Document, scroll: &ScrollSource) {
    let (Some(toggle), Some(menu)) = (
        dom::by_id(document, "nav-toggle"),
        dom::by_id(document, "mobile-menu"),
    ) else {
        return;
    };

    {
        let target = toggle.clone();
        let toggle = toggle.clone();
        let menu = menu.clone();
        let document = document.clone();
        let scroll = scroll.clone();
        dom::listen_unit(&target, "click", move || {
            dom::toggle_class(&toggle, "active");
            dom::toggle_class(&menu, "active");
            if dom::has_class(&menu, "active") {
                // Page scroll freezes while the overlay menu is up.
                scroll.stop();
                let links = dom::query_all(&document, ".mobile-link");
                if !links.is_empty() {
                    let mut player = Player::builder();
                    let mut tl = Timeline::new();
                    let y = player.track_all(&links, Channel::Y);
                    let o = player.track_all(&links, Channel::Opacity);
                    tl.add_stagger(y, links.len(), 50.0, 0.0, 0.6, 0.1, ease::quart_out, At::End);
                    tl.add_stagger(o, links.len(), 0.0, 1.0, 0.6, 0.1, ease::quart_out, At::WithPrev);
                    player.set_timeline(tl);
                    player.play();
                }
            } else {
                scroll.start();
            }
        });
    }

    for link in dom::query_all(document, ".mobile-link") {
        let toggle = toggle.clone();
        let menu = menu.clone();
        let scroll = scroll.clone();
        dom::listen_unit(&link, "click", move || {
            dom::remove_class(&toggle, "active");
            dom::remove_class(&menu, "active");
            scroll.start();
        });
    }
}

/// In-page anchors ease to their target with a fixed offset for the navbar.
fn init_anchor_links(document: &web::Document, scroll: &ScrollSource) {
    for link in dom::query_all(document, "a[href^='#']") {
        let href = link.get_attribute("href").unwrap_or_default();
        if href == "#" {
            continue;
        }
        let document = document.clone();
        let scroll = scroll.clone();
        dom::listen(&link, "click", move |ev: web::MouseEvent| {
            let Some(target) = dom::query(&document, &href) else {
                return;
            };
            ev.prevent_default();
            let top = dom::document_top(&target, scroll.offset()) + ANCHOR_SCROLL_OFFSET;
            scroll.scroll_to(top.max(0.0), ANCHOR_SCROLL_DURATION_SEC);
        });
    }
}

fn init_back_to_top(document: &web::Document, scroll: &ScrollSource) {
    let Some(button) = dom::by_id(document, "back-to-top") else {
        return;
    };
    {
        let button = button.clone();
        scroll.subscribe(move |offset| {
            if offset > BACK_TO_TOP_VISIBLE_AT {
                dom::add_class(&button, "visible");
            } else {
                dom::remove_class(&button, "visible");
            }
        });
    }
    let scroll = scroll.clone();
    dom::listen_unit(&button, "click", move || {
        scroll.scroll_to(0.0, BACK_TO_TOP_DURATION_SEC);
    });
}

fn init_progress_bar(document: &web::Document, scroll: &ScrollSource) {
    let Some(bar) = dom::by_id(document, "scroll-progress") else {
        return;
    };
    let document = document.clone();
    scroll.subscribe(move |offset| {
        let extent = dom::max_scroll(&document);
        let pct = if extent > 0.0 {
            (offset / extent * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        dom::set_style(&bar, "width", &format!("{pct:.3}%"));
    });
}
