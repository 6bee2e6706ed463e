//! Pointer hover treatments: card spotlight, 3D tilt, magnetic pull, image
//! distortion, liquid button ripple, and the certificate preview reveal.

use crate::constants::*;
use crate::dom;
use crate::frame;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const SPOTLIGHT_CARDS: &str = ".project-card, .about-card, .about-fact, .service-card, \
     .achievement-card, .award-card, .cert-card, .achievement-metric, .skill-category, \
     .pillar-card, .metric-card";

const TILT_CARDS: &str = ".service-card, .cert-card, .pillar-card";

const MAGNETIC_BUTTONS: &str =
    ".cta-button, .trimatic-btn, .submit-btn, .project-link.primary, .back-to-top";

const LIQUID_BUTTONS: &str = ".cta-button, .submit-btn, .trimatic-btn";

pub fn init(document: &web::Document) -> Result<()> {
    init_spotlight(document);
    init_tilt(document);
    init_magnetic(document);
    init_distortion(document);
    init_liquid(document)?;
    init_cert_preview(document);
    Ok(())
}

/// Cached bounding rect per card, refreshed on mouseenter; pointer samples
/// coalesce to one style write per frame.
fn init_spotlight(document: &web::Document) {
    for card in dom::query_all(document, SPOTLIGHT_CARDS) {
        dom::add_class(&card, "card-spotlight");
        let rect: Rc<RefCell<Option<web::DomRect>>> = Rc::new(RefCell::new(None));

        {
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen_unit(&card, "mouseenter", move || {
                *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
            });
        }
        {
            let cached = rect.clone();
            let target = card.clone();
            let mut throttled = frame::raf_throttle(move |(x, y): (f64, f64)| {
                if let Some(rect) = cached.borrow().as_ref() {
                    dom::set_style(&target, "--spotlight-x", &format!("{:.1}px", x - rect.left()));
                    dom::set_style(&target, "--spotlight-y", &format!("{:.1}px", y - rect.top()));
                }
            });
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
                if rect.borrow().is_none() {
                    *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
                }
                throttled((ev.client_x() as f64, ev.client_y() as f64));
            });
        }
        let target = card.clone();
        dom::listen_unit(&card, "mouseleave", move || {
            *rect.borrow_mut() = None;
            dom::clear_style(&target, "--spotlight-x");
            dom::clear_style(&target, "--spotlight-y");
        });
    }
}

fn init_tilt(document: &web::Document) {
    for card in dom::query_all(document, TILT_CARDS) {
        let rect: Rc<RefCell<Option<web::DomRect>>> = Rc::new(RefCell::new(None));
        {
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen_unit(&card, "mouseenter", move || {
                *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
            });
        }
        {
            let cached = rect.clone();
            let target = card.clone();
            let mut throttled = frame::raf_throttle(move |(x, y): (f64, f64)| {
                if let Some(rect) = cached.borrow().as_ref() {
                    let cx = rect.width() / 2.0;
                    let cy = rect.height() / 2.0;
                    let local_x = x - rect.left();
                    let local_y = y - rect.top();
                    let max = TILT_MAX_DEG as f64;
                    let rx = (local_y - cy) / cy * max;
                    let ry = (cx - local_x) / cx * max;
                    dom::set_style(&target, "--tilt-x", &format!("{ry:.2}deg"));
                    dom::set_style(&target, "--tilt-y", &format!("{rx:.2}deg"));
                }
            });
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
                if rect.borrow().is_none() {
                    *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
                }
                throttled((ev.client_x() as f64, ev.client_y() as f64));
            });
        }
        let target = card.clone();
        dom::listen_unit(&card, "mouseleave", move || {
            *rect.borrow_mut() = None;
            dom::set_style(&target, "--tilt-x", "0deg");
            dom::set_style(&target, "--tilt-y", "0deg");
        });
    }
}

/// Buttons lean toward the pointer and ease back on leave.
fn init_magnetic(document: &web::Document) {
    for btn in dom::query_all(document, MAGNETIC_BUTTONS) {
        dom::set_style(&btn, "transition", "transform 0.3s cubic-bezier(0.22, 1, 0.36, 1)");
        {
            let target = btn.clone();
            dom::listen(&btn, "mousemove", move |ev: web::MouseEvent| {
                let rect = target.get_bounding_client_rect();
                let x = ev.client_x() as f64 - rect.left() - rect.width() / 2.0;
                let y = ev.client_y() as f64 - rect.top() - rect.height() / 2.0;
                let s = MAGNETIC_STRENGTH as f64;
                dom::set_style(
                    &target,
                    "transform",
                    &format!("translate({:.2}px, {:.2}px)", x * s, y * s),
                );
            });
        }
        let target = btn.clone();
        dom::listen_unit(&btn, "mouseleave", move || {
            dom::set_style(&target, "transform", "translate(0, 0)");
        });
    }
}

/// Project images zoom slightly and shift toward the pointer.
fn init_distortion(document: &web::Document) {
    for frame_el in dom::query_all(document, ".project-image") {
        let Some(img) = dom::query_scoped(&frame_el, "img") else {
            continue;
        };
        let rect: Rc<RefCell<Option<web::DomRect>>> = Rc::new(RefCell::new(None));
        {
            let rect = rect.clone();
            let frame_ref = frame_el.clone();
            dom::listen_unit(&frame_el, "mouseenter", move || {
                *rect.borrow_mut() = Some(frame_ref.get_bounding_client_rect());
            });
        }
        {
            let cached = rect.clone();
            let img = img.clone();
            let mut throttled = frame::raf_throttle(move |(px, py): (f64, f64)| {
                if let Some(rect) = cached.borrow().as_ref() {
                    let x = ((px - rect.left()) / rect.width() - 0.5) * 2.0;
                    let y = ((py - rect.top()) / rect.height() - 0.5) * 2.0;
                    let range = DISTORT_RANGE_PX as f64;
                    dom::set_style(
                        &img,
                        "transform",
                        &format!(
                            "scale({}) translate({:.2}px, {:.2}px)",
                            DISTORT_SCALE,
                            x * range,
                            y * range
                        ),
                    );
                }
            });
            let rect = rect.clone();
            let frame_ref = frame_el.clone();
            dom::listen(&frame_el, "mousemove", move |ev: web::MouseEvent| {
                if rect.borrow().is_none() {
                    *rect.borrow_mut() = Some(frame_ref.get_bounding_client_rect());
                }
                throttled((ev.client_x() as f64, ev.client_y() as f64));
            });
        }
        dom::listen_unit(&frame_el, "mouseleave", move || {
            *rect.borrow_mut() = None;
            dom::set_style(&img, "transform", "scale(1) translate(0, 0)");
        });
    }
}

/// Click ripple that removes itself.
fn init_liquid(document: &web::Document) -> Result<()> {
    for btn in dom::query_all(document, LIQUID_BUTTONS) {
        let target = btn.clone();
        let document = document.clone();
        dom::listen(&btn, "click", move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let x = ev.client_x() as f64 - rect.left();
            let y = ev.client_y() as f64 - rect.top();
            let Ok(ripple) = document.create_element("span") else {
                return;
            };
            ripple.set_class_name("liquid-ripple");
            dom::set_style(&ripple, "left", &format!("{x:.1}px"));
            dom::set_style(&ripple, "top", &format!("{y:.1}px"));
            if target.append_child(&ripple).is_ok() {
                frame::set_timeout_ms(move || ripple.remove(), 600);
            }
        });
    }
    Ok(())
}

const CERT_AFTER_CSS: &str = "\
.cert-card::after, .award-card::after, .timeline-content::after {\
  background-image: var(--cert-bg-image);\
}";

/// Cards with a certificate image get a pointer-following reveal: a dark
/// mask with a clear circle at the pointer, warmed by two accent glows.
fn init_cert_preview(document: &web::Document) {
    let buttons = dom::query_all(document, "[data-cert-image]");
    if buttons.is_empty() {
        return;
    }
    dom::inject_style(document, CERT_AFTER_CSS);

    for btn in buttons {
        let Some(image) = btn.get_attribute("data-cert-image") else {
            continue;
        };
        let Ok(Some(card)) = btn.closest(".cert-card, .award-card, .timeline-content") else {
            continue;
        };
        dom::set_style(&card, "--cert-bg-image", &format!("url('{image}')"));

        let Ok(spotlight) = document.create_element("div") else {
            continue;
        };
        spotlight.set_class_name("cert-spotlight-reveal");
        if card.append_child(&spotlight).is_err() {
            continue;
        }

        let rect: Rc<RefCell<Option<web::DomRect>>> = Rc::new(RefCell::new(None));
        {
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen_unit(&card, "mouseenter", move || {
                *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
            });
        }
        {
            let cached = rect.clone();
            let spotlight = spotlight.clone();
            let mut throttled = frame::raf_throttle(move |(px, py): (f64, f64)| {
                if let Some(rect) = cached.borrow().as_ref() {
                    let x = px - rect.left();
                    let y = py - rect.top();
                    dom::set_style(&spotlight, "background", &reveal_gradient(x, y));
                    dom::set_style(
                        &spotlight,
                        "box-shadow",
                        "inset 0 0 150px rgba(255, 77, 0, 0.08), \
                         inset 0 0 80px rgba(255, 140, 60, 0.05)",
                    );
                }
            });
            let rect = rect.clone();
            let card_ref = card.clone();
            dom::listen(&card, "mousemove", move |ev: web::MouseEvent| {
                if rect.borrow().is_none() {
                    *rect.borrow_mut() = Some(card_ref.get_bounding_client_rect());
                }
                throttled((ev.client_x() as f64, ev.client_y() as f64));
            });
        }
        let spotlight_clear = spotlight.clone();
        dom::listen_unit(&card, "mouseleave", move || {
            *rect.borrow_mut() = None;
            dom::clear_style(&spotlight_clear, "background");
            dom::clear_style(&spotlight_clear, "box-shadow");
        });
    }
}

fn reveal_gradient(x: f64, y: f64) -> String {
    let at = format!("circle at {x:.1}px {y:.1}px");
    format!(
        "radial-gradient({at}, transparent 0%, transparent 150px, \
         rgba(0,0,0,0.05) 170px, rgba(0,0,0,0.12) 190px, rgba(0,0,0,0.22) 215px, \
         rgba(0,0,0,0.35) 245px, rgba(0,0,0,0.48) 275px, rgba(0,0,0,0.60) 310px, \
         rgba(0,0,0,0.70) 350px, rgba(0,0,0,0.78) 400px, rgba(0,0,0,0.84) 460px, \
         rgba(0,0,0,0.88) 530px, rgba(0,0,0,0.91) 610px, rgba(0,0,0,0.93) 700px), \
         radial-gradient({at}, rgba(255,77,0,0.12) 0%, rgba(255,77,0,0.08) 150px, \
         rgba(255,77,0,0.04) 250px, transparent 400px), \
         radial-gradient({at}, rgba(255,140,60,0.06) 0%, rgba(255,140,60,0.03) 200px, \
         transparent 350px)"
    )
}
