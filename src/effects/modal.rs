//! Case study modal: fills the dialog from the static case data and manages
//! open/close state, including the Escape key and page scroll lock.

use crate::core::case_studies::{self, CaseStudy};
use crate::dom;
use anyhow::Result;
use web_sys as web;

pub fn init(document: &web::Document) -> Result<()> {
    let Some(modal) = dom::by_id(document, "case-modal") else {
        return Ok(());
    };

    for btn in dom::query_all(document, "[data-case-open]") {
        let document = document.clone();
        let modal = modal.clone();
        let target = btn.clone();
        dom::listen(&btn, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            let id = target
                .closest(".project-card")
                .ok()
                .flatten()
                .and_then(|card| card.get_attribute("data-case"));
            if let Some(id) = id {
                if let Some(case) = case_studies::find(&id) {
                    open(&document, &modal, case);
                }
            }
        });
    }

    for el in dom::query_all(document, "#case-modal [data-close]") {
        let document = document.clone();
        let modal = modal.clone();
        dom::listen_unit(&el, "click", move || close(&document, &modal));
    }

    {
        let target = document.clone();
        let document = document.clone();
        dom::listen(&target, "keydown", move |ev: web::KeyboardEvent| {
            if ev.key() == "Escape" {
                if let Some(modal) = dom::by_id(&document, "case-modal") {
                    if dom::has_class(&modal, "active") {
                        close(&document, &modal);
                    }
                }
            }
        });
    }
    Ok(())
}

fn open(document: &web::Document, modal: &web::Element, case: &CaseStudy) {
    if let Some(el) = dom::by_id(document, "case-title") {
        dom::set_text(&el, case.title);
    }
    if let Some(el) = dom::by_id(document, "case-subtitle") {
        dom::set_text(&el, case.subtitle);
    }
    if let Some(el) = dom::by_id(document, "case-highlights") {
        let html: String = case
            .highlights
            .iter()
            .map(|h| format!("<li>{h}</li>"))
            .collect();
        dom::set_html(&el, &html);
    }
    if let Some(el) = dom::by_id(document, "case-meta") {
        let html: String = case
            .meta
            .iter()
            .map(|m| format!("<span>{m}</span>"))
            .collect();
        dom::set_html(&el, &html);
    }
    if let Some(el) = dom::by_id(document, "case-actions") {
        let html: String = case
            .actions
            .iter()
            .map(|a| {
                let class = if a.primary { "primary" } else { "" };
                format!(
                    "<a href=\"{}\" target=\"_blank\" class=\"{}\">{}</a>",
                    a.url, class, a.label
                )
            })
            .collect();
        dom::set_html(&el, &html);
    }
    if let Some(video) = dom::by_id(document, "case-video") {
        match case.video_id {
            Some(id) => {
                dom::set_html(&video, &embed_html(id));
                dom::set_style(&video, "display", "block");
            }
            None => {
                dom::set_style(&video, "display", "none");
                dom::set_html(&video, "");
            }
        }
    }

    dom::add_class(modal, "active");
    let _ = modal.set_attribute("aria-hidden", "false");
    dom::lock_page_scroll(document, true);
}

fn close(document: &web::Document, modal: &web::Element) {
    dom::remove_class(modal, "active");
    let _ = modal.set_attribute("aria-hidden", "true");
    dom::lock_page_scroll(document, false);
}

fn embed_html(video_id: &str) -> String {
    format!(
        "<iframe width=\"100%\" height=\"100%\" \
         src=\"https://www.youtube.com/embed/{video_id}\" \
         title=\"Project Video Demo\" frameborder=\"0\" \
         allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; \
         picture-in-picture; web-share\" \
         referrerpolicy=\"strict-origin-when-cross-origin\" \
         allowfullscreen loading=\"lazy\"></iframe>"
    )
}
