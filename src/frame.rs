//! Animation-frame scheduling.
//!
//! `RafLoop` is the one way continuous effects tick: a self-rescheduling
//! requestAnimationFrame closure with a shared active flag, so a loop can be
//! stopped off-screen and re-armed without rebuilding its closure.
//! `raf_throttle` coalesces high-frequency input (pointer, scroll) to at
//! most one callback per rendered frame, always carrying the latest value.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct RafLoop {
    active: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafLoop {
    pub fn new(mut frame: impl FnMut() + 'static) -> Self {
        let active = Rc::new(Cell::new(false));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_schedule = tick.clone();
        let active_tick = active.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !active_tick.get() {
                return;
            }
            frame();
            if !active_tick.get() {
                return;
            }
            if let Some(w) = web::window() {
                let _ = w.request_animation_frame(
                    tick_schedule
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                );
            }
        }) as Box<dyn FnMut()>));
        Self { active, tick }
    }

    /// Arm the loop; a no-op if already running.
    pub fn start(&self) {
        if self.active.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                self.tick.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            );
        }
    }

    /// The loop stops rescheduling after the current frame.
    pub fn stop(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

/// Run `frame` once per animation frame until it returns `false`, then
/// retire the loop.
pub fn run_while(mut frame: impl FnMut() -> bool + 'static) {
    let holder: Rc<RefCell<Option<RafLoop>>> = Rc::new(RefCell::new(None));
    let inner = holder.clone();
    let raf = RafLoop::new(move || {
        if !frame() {
            if let Some(r) = inner.borrow().as_ref() {
                r.stop();
            }
        }
    });
    raf.start();
    *holder.borrow_mut() = Some(raf);
}

/// Wrap a callback so that any number of raw values per frame collapse into
/// one invocation with the most recent value. Values are coalesced, never
/// queued.
pub fn raf_throttle<T: 'static>(mut callback: impl FnMut(T) + 'static) -> impl FnMut(T) {
    let latest: Rc<RefCell<Option<T>>> = Rc::new(RefCell::new(None));
    let scheduled = Rc::new(Cell::new(false));
    let latest_run = latest.clone();
    let scheduled_run = scheduled.clone();
    let run = Closure::wrap(Box::new(move || {
        scheduled_run.set(false);
        if let Some(value) = latest_run.borrow_mut().take() {
            callback(value);
        }
    }) as Box<dyn FnMut()>);
    move |value: T| {
        *latest.borrow_mut() = Some(value);
        if scheduled.replace(true) {
            return;
        }
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(run.as_ref().unchecked_ref());
        } else {
            scheduled.set(false);
        }
    }
}

/// One-shot timer. Returns the handle so owners can cancel a pending revert
/// on teardown.
pub fn set_timeout_ms(callback: impl FnOnce() + 'static, ms: i32) -> Option<i32> {
    let w = web::window()?;
    let closure = Closure::once(callback);
    let id = w
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    closure.forget();
    Some(id)
}

pub fn clear_timeout(id: i32) {
    if let Some(w) = web::window() {
        w.clear_timeout_with_handle(id);
    }
}

/// Repeating timer for the fixed-step counter animation.
pub fn set_interval_ms(callback: impl FnMut() + 'static, ms: i32) -> Option<i32> {
    let w = web::window()?;
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    let id = w
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        )
        .ok()?;
    closure.forget();
    Some(id)
}

pub fn clear_interval(id: i32) {
    if let Some(w) = web::window() {
        w.clear_interval_with_handle(id);
    }
}
