//! Certificate lightbox with prev/next navigation over the page's
//! certificate images, in document order.

use crate::core::gallery::GalleryState;
use crate::dom;
use anyhow::Result;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Lightbox {
    document: web::Document,
    root: web::Element,
    images: Vec<String>,
    state: RefCell<GalleryState>,
}

impl Lightbox {
    fn open_at(&self, index: usize) {
        if !self.state.borrow_mut().open_at(index) {
            return;
        }
        if let Some(img) = dom::by_id(&self.document, "cert-lightbox-img") {
            if let Some(img) = img.dyn_ref::<web::HtmlImageElement>() {
                img.set_src(&self.images[index]);
            }
        }
        dom::add_class(&self.root, "active");
        dom::lock_page_scroll(&self.document, true);
        self.sync_nav();
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        dom::remove_class(&self.root, "active");
        dom::lock_page_scroll(&self.document, false);
    }

    fn shift(&self, forward: bool) {
        let moved = {
            let mut state = self.state.borrow_mut();
            if forward {
                state.next()
            } else {
                state.prev()
            }
        };
        if moved {
            if let Some(index) = self.state.borrow().current() {
                if let Some(img) = dom::by_id(&self.document, "cert-lightbox-img") {
                    if let Some(img) = img.dyn_ref::<web::HtmlImageElement>() {
                        img.set_src(&self.images[index]);
                    }
                }
            }
            self.sync_nav();
        }
    }

    fn sync_nav(&self) {
        let state = self.state.borrow();
        if let (Some(current), Some(el)) = (
            state.current(),
            dom::by_id(&self.document, "cert-current"),
        ) {
            dom::set_text(&el, &(current + 1).to_string());
        }
        set_disabled(&self.document, ".cert-nav-prev", state.at_first());
        set_disabled(&self.document, ".cert-nav-next", state.at_last());
    }

    fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

fn set_disabled(document: &web::Document, selector: &str, disabled: bool) {
    if let Some(btn) = dom::query(document, selector) {
        if let Some(btn) = btn.dyn_ref::<web::HtmlButtonElement>() {
            btn.set_disabled(disabled);
        }
    }
}

pub fn init(document: &web::Document) -> Result<()> {
    let Some(root) = dom::by_id(document, "cert-lightbox") else {
        return Ok(());
    };

    let buttons = dom::query_all(document, "[data-cert-image]");
    let images: Vec<String> = buttons
        .iter()
        .filter_map(|b| b.get_attribute("data-cert-image"))
        .collect();
    if images.is_empty() {
        return Ok(());
    }
    if let Some(total) = dom::by_id(document, "cert-total") {
        dom::set_text(&total, &images.len().to_string());
    }

    let len = images.len();
    let lightbox = Rc::new(Lightbox {
        document: document.clone(),
        root,
        images,
        state: RefCell::new(GalleryState::new(len)),
    });

    for (index, btn) in buttons.iter().enumerate() {
        let lightbox = lightbox.clone();
        dom::listen(btn, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            lightbox.open_at(index);
        });
    }

    for selector in [".cert-lightbox-close", ".cert-lightbox-overlay"] {
        if let Some(el) = dom::query(document, selector) {
            let lightbox = lightbox.clone();
            dom::listen_unit(&el, "click", move || lightbox.close());
        }
    }
    if let Some(prev) = dom::query(document, ".cert-nav-prev") {
        let lightbox = lightbox.clone();
        dom::listen_unit(&prev, "click", move || lightbox.shift(false));
    }
    if let Some(next) = dom::query(document, ".cert-nav-next") {
        let lightbox = lightbox.clone();
        dom::listen_unit(&next, "click", move || lightbox.shift(true));
    }

    {
        let lightbox = lightbox.clone();
        dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
            if !lightbox.is_open() {
                return;
            }
            match ev.key().as_str() {
                "Escape" => lightbox.close(),
                "ArrowLeft" => lightbox.shift(false),
                "ArrowRight" => lightbox.shift(true),
                _ => {}
            }
        });
    }
    Ok(())
}
