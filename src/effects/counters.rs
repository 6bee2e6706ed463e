//! Stat counters that count up when they enter the viewport.
//!
//! The target value comes from `data-count` or the element's text. Non
//! numeric stats (e.g. "Top 10") are left alone. Each element animates once;
//! intermediate steps render with one decimal, the final step with the exact
//! source text.

use crate::constants::*;
use crate::core::counter::{parse_target, CounterAnim};
use crate::dom;
use crate::frame;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

const SELECTOR: &str = ".stat-number, .metric-number, .achievement-metric .metric-number";

pub fn init(document: &web::Document) -> Result<()> {
    for el in dom::query_all(document, SELECTOR) {
        let target = el.clone();
        dom::observe_visibility(&el, "0px", Some(0.5), move |on_screen| {
            if on_screen && !dom::has_class(&target, "counted") {
                dom::add_class(&target, "counted");
                animate(&target);
            }
        });
    }
    Ok(())
}

fn animate(el: &web::Element) {
    let text = el
        .get_attribute("data-count")
        .unwrap_or_else(|| el.text_content().unwrap_or_default())
        .trim()
        .to_string();
    let Some(target) = parse_target(&text) else {
        return;
    };

    let anim = Rc::new(RefCell::new(CounterAnim::new(target, COUNTER_STEPS)));
    let el = el.clone();
    let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let interval_inner = interval.clone();
    let step_ms = (COUNTER_DURATION_MS / COUNTER_STEPS as f64) as i32;
    let id = frame::set_interval_ms(
        move || {
            let mut anim = anim.borrow_mut();
            dom::set_text(&el, &anim.step());
            if anim.is_done() {
                if let Some(id) = interval_inner.borrow_mut().take() {
                    frame::clear_interval(id);
                }
            }
        },
        step_ms,
    );
    *interval.borrow_mut() = id;
}
