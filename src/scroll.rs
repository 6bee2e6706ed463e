//! Scroll position source.
//!
//! One process-wide smoothed scroll offset, published to subscribers when it
//! changes. With a fine pointer and no reduced-motion preference the offset
//! comes from the eased [`core::scroll::ScrollModel`] advanced by a frame
//! loop (wheel and touch input intercepted); otherwise the native scroll
//! offset is mirrored directly, throttled to one publish per frame.
//!
//! The source is constructed by the bootstrap and injected into consumers;
//! there is no global lookup.

use crate::constants::*;
use crate::core::scroll::{smooth_scroll_enabled, InputKind, ScrollModel};
use crate::dom;
use crate::frame::{self, RafLoop};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

type Subscriber = Box<dyn FnMut(f64)>;

struct Inner {
    document: web::Document,
    model: Option<RefCell<ScrollModel>>,
    offset: Cell<f64>,
    subscribers: RefCell<Vec<Subscriber>>,
    last_tick: Cell<Instant>,
    raf: RefCell<Option<RafLoop>>,
}

#[derive(Clone)]
pub struct ScrollSource {
    inner: Rc<Inner>,
}

impl ScrollSource {
    /// Build the source and wire its input listeners. Smooth scrolling is
    /// skipped under reduced motion or on coarse-pointer devices.
    pub fn new(document: &web::Document, reduced_motion: bool) -> Self {
        let smooth = smooth_scroll_enabled(reduced_motion, dom::coarse_pointer());
        let model = smooth.then(|| {
            let (vw, _) = dom::viewport_size();
            let duration = if vw < MOBILE_WIDTH_PX {
                SCROLL_DURATION_MOBILE_SEC
            } else {
                SCROLL_DURATION_SEC
            };
            let mut m = ScrollModel::new(duration, SCROLL_WHEEL_MULTIPLIER, SCROLL_TOUCH_MULTIPLIER);
            m.set_max_scroll(dom::max_scroll(document));
            m.set_offset(dom::native_scroll_y());
            RefCell::new(m)
        });
        let source = Self {
            inner: Rc::new(Inner {
                document: document.clone(),
                model,
                offset: Cell::new(dom::native_scroll_y()),
                subscribers: RefCell::new(Vec::new()),
                last_tick: Cell::new(Instant::now()),
                raf: RefCell::new(None),
            }),
        };
        if source.inner.model.is_some() {
            source.wire_smooth();
        } else {
            source.wire_native();
        }
        source
    }

    pub fn is_smooth(&self) -> bool {
        self.inner.model.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.inner.offset.get()
    }

    /// The handler is invoked with the current offset on every change.
    pub fn subscribe(&self, mut handler: impl FnMut(f64) + 'static) {
        handler(self.inner.offset.get());
        self.inner.subscribers.borrow_mut().push(Box::new(handler));
    }

    fn publish(&self, offset: f64) {
        self.inner.offset.set(offset);
        for sub in self.inner.subscribers.borrow_mut().iter_mut() {
            sub(offset);
        }
    }

    /// Freeze the driver (preloader, mobile menu, hidden tab). In native
    /// mode nothing intercepts input, so the page scroll is locked instead.
    pub fn stop(&self) {
        match &self.inner.model {
            Some(model) => model.borrow_mut().stop(),
            None => dom::lock_page_scroll(&self.inner.document, true),
        }
    }

    pub fn start(&self) {
        match &self.inner.model {
            Some(model) => {
                model.borrow_mut().start();
                self.inner.last_tick.set(Instant::now());
            }
            None => dom::lock_page_scroll(&self.inner.document, false),
        }
        if let Some(raf) = self.inner.raf.borrow().as_ref() {
            raf.start();
        }
    }

    /// Pause the frame loop entirely (page hidden).
    pub fn pause(&self) {
        if let Some(raf) = self.inner.raf.borrow().as_ref() {
            raf.stop();
        }
    }

    /// Ease to an absolute offset; in native mode delegates to the
    /// browser's smooth scrolling.
    pub fn scroll_to(&self, target: f64, duration_sec: f64) {
        match &self.inner.model {
            Some(model) => model.borrow_mut().scroll_to(target, duration_sec),
            None => {
                if let Some(w) = web::window() {
                    let options = web::ScrollToOptions::new();
                    options.set_top(target);
                    options.set_behavior(web::ScrollBehavior::Smooth);
                    w.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
    }

    /// Re-measure the scrollable extent (resize, content-height change).
    pub fn refresh_bounds(&self, document: &web::Document) {
        if let Some(model) = &self.inner.model {
            model.borrow_mut().set_max_scroll(dom::max_scroll(document));
        }
    }

    fn wire_smooth(&self) {
        let Some(window) = web::window() else { return };

        // Wheel input replaces native scrolling entirely.
        {
            let source = self.clone();
            dom::listen(&window, "wheel", move |ev: web::WheelEvent| {
                if let Some(model) = &source.inner.model {
                    if !model.borrow().is_stopped() {
                        ev.prevent_default();
                    }
                    model.borrow_mut().apply_input(ev.delta_y(), InputKind::Wheel);
                }
            });
        }

        // Touch drags: deltas from the last touch position.
        let touch_y = Rc::new(Cell::new(0.0_f64));
        {
            let touch_y = touch_y.clone();
            dom::listen(&window, "touchstart", move |ev: web::TouchEvent| {
                if let Some(t) = ev.touches().get(0) {
                    touch_y.set(t.client_y() as f64);
                }
            });
        }
        {
            let source = self.clone();
            dom::listen(&window, "touchmove", move |ev: web::TouchEvent| {
                let Some(t) = ev.touches().get(0) else { return };
                let y = t.client_y() as f64;
                let delta = touch_y.replace(y) - y;
                if let Some(model) = &source.inner.model {
                    if !model.borrow().is_stopped() {
                        ev.prevent_default();
                    }
                    model.borrow_mut().apply_input(delta, InputKind::Touch);
                }
            });
        }

        // Frame loop: advance the ease and mirror it into the real scroll
        // position so native consumers (focus, find-in-page) stay coherent.
        let source = self.clone();
        let raf = RafLoop::new(move || {
            let now = Instant::now();
            let dt = (now - source.inner.last_tick.get()).as_secs_f64();
            source.inner.last_tick.set(now);
            let Some(model) = &source.inner.model else { return };
            let changed = model.borrow_mut().tick(dt);
            if let Some(offset) = changed {
                if let Some(w) = web::window() {
                    w.scroll_to_with_x_and_y(0.0, offset);
                }
                source.publish(offset);
            }
        });
        raf.start();
        *self.inner.raf.borrow_mut() = Some(raf);
    }

    fn wire_native(&self) {
        let Some(window) = web::window() else { return };
        let source = self.clone();
        let mut throttled = frame::raf_throttle(move |offset| source.publish(offset));
        dom::listen_unit(&window, "scroll", move || {
            throttled(dom::native_scroll_y());
        });
    }
}
