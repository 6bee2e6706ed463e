//! Scroll trigger registry.
//!
//! Pairs DOM elements with [`TriggerZone`]s and dispatches enter/leave/
//! progress hooks as a scroll offset stream moves through them. Zone
//! geometry is measured from the live layout and can be re-measured after
//! resizes without losing one-shot state.

use crate::core::trigger::{TriggerZone, ZoneConfig, ZoneEvent};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Callbacks attached to one zone. Any subset may be present.
#[derive(Default)]
pub struct TriggerHooks {
    pub on_enter: Option<Box<dyn FnMut()>>,
    pub on_leave: Option<Box<dyn FnMut()>>,
    pub on_progress: Option<Box<dyn FnMut(f64)>>,
}

impl TriggerHooks {
    pub fn enter(f: impl FnMut() + 'static) -> Self {
        Self {
            on_enter: Some(Box::new(f)),
            ..Default::default()
        }
    }

    pub fn progress(f: impl FnMut(f64) + 'static) -> Self {
        Self {
            on_progress: Some(Box::new(f)),
            ..Default::default()
        }
    }

    pub fn with_leave(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_leave = Some(Box::new(f));
        self
    }
}

struct Registration {
    element: web::Element,
    config: ZoneConfig,
    zone: TriggerZone,
    hooks: TriggerHooks,
}

#[derive(Clone)]
pub struct TriggerRegistry {
    entries: Rc<RefCell<Vec<Registration>>>,
}

impl TriggerRegistry {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Register a zone measured from `element`'s current layout position.
    pub fn add(&self, element: &web::Element, config: ZoneConfig, hooks: TriggerHooks) {
        let (top, height, vh) = measure(element);
        let zone = TriggerZone::from_region(top, height, vh, config);
        self.entries.borrow_mut().push(Registration {
            element: element.clone(),
            config,
            zone,
            hooks,
        });
    }

    /// Drive every zone from a new scroll offset.
    pub fn update_all(&self, offset: f64) {
        for entry in self.entries.borrow_mut().iter_mut() {
            let (event, progress) = entry.zone.update(offset);
            match event {
                ZoneEvent::Enter => {
                    if let Some(f) = entry.hooks.on_enter.as_mut() {
                        f();
                    }
                }
                ZoneEvent::Leave => {
                    if let Some(f) = entry.hooks.on_leave.as_mut() {
                        f();
                    }
                }
                ZoneEvent::None => {}
            }
            if let Some(p) = progress {
                if let Some(f) = entry.hooks.on_progress.as_mut() {
                    f(p);
                }
            }
        }
    }

    /// Re-measure every zone against the current layout. Fired zones stay
    /// fired.
    pub fn refresh(&self, offset: f64) {
        for entry in self.entries.borrow_mut().iter_mut() {
            let (top, height, vh) = measure(&entry.element);
            entry.zone.remeasure(top, height, vh, entry.config);
        }
        self.update_all(offset);
    }
}

fn measure(element: &web::Element) -> (f64, f64, f64) {
    let rect = element.get_bounding_client_rect();
    let top = rect.top() + dom::native_scroll_y();
    let (_, vh) = dom::viewport_size();
    (top, rect.height(), vh)
}
