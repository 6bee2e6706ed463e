//! Hero title scramble and the typewriter lines.

use crate::constants::*;
use crate::core::scramble::{Glyph, Scramble};
use crate::dom;
use crate::frame::{self, RafLoop};
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn init(document: &web::Document) -> Result<()> {
    for (index, el) in dom::query_all(document, ".hero-title .title-word")
        .into_iter()
        .enumerate()
    {
        let text = el.text_content().unwrap_or_default();
        let runner = ScrambleRunner::new(el.clone());

        {
            let runner = runner.clone();
            let text = text.clone();
            frame::set_timeout_ms(
                move || runner.set_text(&text),
                index as i32 * SCRAMBLE_STAGGER_MS,
            );
        }
        dom::listen_unit(&el, "mouseenter", move || runner.set_text(&text));
    }
    Ok(())
}

/// One element's scramble driver. Starting a new transition replaces any
/// transition still in flight.
#[derive(Clone)]
struct ScrambleRunner {
    element: web::Element,
    current: Rc<RefCell<Option<Scramble>>>,
    raf: Rc<RefCell<Option<RafLoop>>>,
}

impl ScrambleRunner {
    fn new(element: web::Element) -> Self {
        let current: Rc<RefCell<Option<Scramble>>> = Rc::new(RefCell::new(None));
        let raf = Rc::new(RefCell::new(None));

        let el = element.clone();
        let state = current.clone();
        let raf_inner = raf.clone();
        let loop_ = RafLoop::new(move || {
            let mut slot = state.borrow_mut();
            let Some(scramble) = slot.as_mut() else {
                if let Some(r) = raf_inner.borrow().as_ref() {
                    r.stop();
                }
                return;
            };
            let mut rng = rand::thread_rng();
            let (glyphs, done) = scramble.step(SCRAMBLE_CHURN_CHANCE, &mut rng);
            dom::set_html(&el, &render(&glyphs));
            if done {
                dom::set_text(&el, &scramble.final_text());
                *slot = None;
                if let Some(r) = raf_inner.borrow().as_ref() {
                    r.stop();
                }
            }
        });
        *raf.borrow_mut() = Some(loop_);

        Self {
            element,
            current,
            raf,
        }
    }

    fn set_text(&self, text: &str) {
        let old = self.element.text_content().unwrap_or_default();
        let mut rng = rand::thread_rng();
        *self.current.borrow_mut() =
            Some(Scramble::new(&old, text, SCRAMBLE_WINDOW_MAX, &mut rng));
        if let Some(r) = self.raf.borrow().as_ref() {
            r.start();
        }
    }
}

fn render(glyphs: &[Glyph]) -> String {
    let mut out = String::new();
    for g in glyphs {
        match g {
            Glyph::Old(Some(c)) | Glyph::New(Some(c)) => out.push(*c),
            Glyph::Old(None) | Glyph::New(None) => {}
            Glyph::Dud(c) => {
                out.push_str("<span class=\"dud\">");
                out.push(*c);
                out.push_str("</span>");
            }
        }
    }
    out
}

/// Lines tagged `data-typewriter` type themselves out, one second apart.
pub fn init_typewriter(document: &web::Document) -> Result<()> {
    for (index, el) in dom::query_all(document, "[data-typewriter]")
        .into_iter()
        .enumerate()
    {
        let text: Vec<char> = el.text_content().unwrap_or_default().chars().collect();
        dom::set_text(&el, "");
        dom::set_style(&el, "display", "inline-block");

        frame::set_timeout_ms(
            move || {
                let written = Rc::new(RefCell::new(0_usize));
                let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
                let interval_inner = interval.clone();
                let id = frame::set_interval_ms(
                    move || {
                        let mut n = written.borrow_mut();
                        if *n < text.len() {
                            *n += 1;
                            let shown: String = text[..*n].iter().collect();
                            dom::set_text(&el, &shown);
                        } else if let Some(id) = interval_inner.borrow_mut().take() {
                            frame::clear_interval(id);
                        }
                    },
                    50,
                );
                *interval.borrow_mut() = id;
            },
            index as i32 * 1000,
        );
    }
    Ok(())
}
