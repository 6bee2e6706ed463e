//! DOM helpers shared by the effect initializers.
//!
//! Every lookup is optional: a missing element means the effect silently
//! skips itself, never an error.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = document.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

pub fn query_scoped(el: &web::Element, selector: &str) -> Option<web::Element> {
    el.query_selector(selector).ok().flatten()
}

pub fn query_all_scoped(el: &web::Element, selector: &str) -> Vec<web::Element> {
    let mut out = Vec::new();
    if let Ok(list) = el.query_selector_all(selector) {
        for i in 0..list.length() {
            if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
                out.push(el);
            }
        }
    }
    out
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    document.get_element_by_id(id)
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

#[inline]
pub fn has_class(el: &web::Element, class: &str) -> bool {
    el.class_list().contains(class)
}

#[inline]
pub fn toggle_class(el: &web::Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

#[inline]
pub fn set_style(el: &web::Element, prop: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().set_property(prop, value);
    }
}

#[inline]
pub fn clear_style(el: &web::Element, prop: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        let _ = html.style().remove_property(prop);
    }
}

#[inline]
pub fn set_text(el: &web::Element, text: &str) {
    el.set_text_content(Some(text));
}

#[inline]
pub fn set_html(el: &web::Element, html: &str) {
    el.set_inner_html(html);
}

pub fn viewport_size() -> (f64, f64) {
    let Some(w) = web::window() else {
        return (0.0, 0.0);
    };
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Native scroll offset of the page.
pub fn native_scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scrollable extent: document height minus one viewport.
pub fn max_scroll(document: &web::Document) -> f64 {
    let doc_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let (_, vh) = viewport_size();
    (doc_height - vh).max(0.0)
}

/// Document-space top of an element at the given current scroll offset.
pub fn document_top(el: &web::Element, scroll_offset: f64) -> f64 {
    el.get_bounding_client_rect().top() + scroll_offset
}

pub fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

#[inline]
pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

#[inline]
pub fn coarse_pointer() -> bool {
    media_matches("(hover: none) and (pointer: coarse)")
}

/// Toggle the page scroll lock used by the preloader and the dialogs.
pub fn lock_page_scroll(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "" });
    }
}

/// Attach a typed event listener and leak the closure; registrations live
/// for the page's lifetime.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// No-argument variant for listeners that ignore the event object.
pub fn listen_unit(target: &web::EventTarget, event: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(document: &web::Document, element_id: &str, handler: impl FnMut() + 'static) {
    if let Some(el) = document.get_element_by_id(element_id) {
        listen_unit(&el, "click", handler);
    }
}

/// Watch an element's viewport intersection. Falls back to "always visible"
/// when IntersectionObserver is unavailable.
pub fn observe_visibility(
    element: &web::Element,
    root_margin: &str,
    threshold: Option<f64>,
    mut on_change: impl FnMut(bool) + 'static,
) {
    let Some(window) = web::window() else { return };
    if !js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
        on_change(true);
        return;
    }
    let closure = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    on_change(entry.is_intersecting());
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let options = web::IntersectionObserverInit::new();
    options.set_root_margin(root_margin);
    if let Some(t) = threshold {
        options.set_threshold(&JsValue::from_f64(t));
    }
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer.observe(element),
        Err(e) => log::error!("IntersectionObserver error: {:?}", e),
    }
    closure.forget();
}

/// Append a style element with the given CSS (keyframes the particle and
/// certificate effects rely on).
pub fn inject_style(document: &web::Document, css: &str) {
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        let _ = head.append_child(&style);
    }
}
