//! Contact form submission.
//!
//! Posting runs through [`crate::net::post_form`]; the submit button's label
//! and disabled state track the [`SubmitPhase`]. Phases that revert do so on
//! a tracked timer, so a resubmission cancels the pending revert instead of
//! racing it.

use crate::constants::*;
use crate::core::form::SubmitPhase;
use crate::dom;
use crate::frame;
use crate::net;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct FormController {
    form: web::HtmlFormElement,
    button: Option<web::HtmlButtonElement>,
    label: Option<web::Element>,
    original_label: String,
    revert_timer: RefCell<Option<i32>>,
}

impl FormController {
    fn apply(&self, phase: SubmitPhase) {
        if let (Some(label_el), Some(text)) = (&self.label, phase.label()) {
            dom::set_text(label_el, text);
        }
        if phase == SubmitPhase::Idle {
            if let Some(label_el) = &self.label {
                dom::set_text(label_el, &self.original_label);
            }
        }
        if let Some(button) = &self.button {
            button.set_disabled(phase.is_disabled());
        }
    }

    /// The revert restores the idle label and, after a successful send,
    /// clears the fields. The fields stay filled until then.
    fn schedule_revert(self: &Rc<Self>, from: SubmitPhase) {
        self.cancel_revert();
        let controller = self.clone();
        let id = frame::set_timeout_ms(
            move || {
                controller.revert_timer.borrow_mut().take();
                if from.clears_form() {
                    controller.form.reset();
                }
                controller.apply(SubmitPhase::Idle);
            },
            FORM_REVERT_MS,
        );
        *self.revert_timer.borrow_mut() = id;
    }

    fn cancel_revert(&self) {
        if let Some(id) = self.revert_timer.borrow_mut().take() {
            frame::clear_timeout(id);
        }
    }
}

pub fn init(document: &web::Document) -> Result<()> {
    let Some(form_el) = dom::by_id(document, "contact-form") else {
        return Ok(());
    };
    let Some(form) = form_el.dyn_ref::<web::HtmlFormElement>().cloned() else {
        return Ok(());
    };

    let button = dom::by_id(document, "submit-btn")
        .and_then(|b| b.dyn_ref::<web::HtmlButtonElement>().cloned());
    let label = dom::query(document, "#submit-btn .btn-text");
    let original_label = label
        .as_ref()
        .and_then(|l| l.text_content())
        .unwrap_or_default();

    let controller = Rc::new(FormController {
        form: form.clone(),
        button,
        label,
        original_label,
        revert_timer: RefCell::new(None),
    });

    dom::listen(&form_el, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let controller = controller.clone();
        controller.cancel_revert();
        controller.apply(SubmitPhase::Sending);

        spawn_local(async move {
            let phase = match net::post_form(FORM_ENDPOINT, &controller.form).await {
                Ok(success) => SubmitPhase::on_response(success),
                Err(e) => {
                    log::error!("form submission failed: {e:?}");
                    SubmitPhase::Errored
                }
            };
            controller.apply(phase);
            if phase.reverts() {
                controller.schedule_revert(phase);
            }
        });
    });
    Ok(())
}
