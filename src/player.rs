//! Plays a [`Timeline`] against DOM elements.
//!
//! Each timeline track is bound to one element/channel pair. Per frame the
//! player samples every track at the elapsed time, composes the transform
//! channels bound to the same element into one `transform` string, and
//! writes the rest as individual style properties. The loop retires itself
//! once the timeline and all completion marks have passed.

use crate::core::timeline::Timeline;
use crate::dom;
use crate::frame;
use instant::Instant;
use web_sys as web;

/// Style property a track drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Channel {
    Opacity,
    /// translateX, px.
    X,
    /// translateY, px.
    Y,
    /// translateY as a percentage of the element's own height.
    YPct,
    Scale,
    ScaleX,
    /// rotateX, degrees.
    RotateX,
    /// rotate, degrees.
    Rotate,
    /// `left`, percent. Used by the journey rocket.
    LeftPct,
}

struct Binding {
    track: usize,
    element: web::Element,
    channel: Channel,
}

#[derive(Default)]
pub struct Player {
    timeline: Timeline,
    bindings: Vec<Binding>,
    mark_handlers: Vec<(usize, Box<dyn FnMut()>)>,
    next_track: usize,
}

impl Player {
    pub fn new(timeline: Timeline) -> Self {
        Self {
            timeline,
            ..Default::default()
        }
    }

    /// Builder used when tracks are allocated while composing the timeline:
    /// reserve ids first, then attach the finished timeline.
    pub fn builder() -> Self {
        Self::default()
    }

    pub fn set_timeline(&mut self, timeline: Timeline) {
        self.timeline = timeline;
    }

    /// Reserve a fresh track id bound to `element`/`channel`.
    pub fn track(&mut self, element: &web::Element, channel: Channel) -> usize {
        let id = self.next_track;
        self.next_track += 1;
        self.bindings.push(Binding {
            track: id,
            element: element.clone(),
            channel,
        });
        id
    }

    /// Bind the same channel on a list of elements, returning the base id of
    /// the contiguous track range (for [`Timeline::add_stagger`]).
    pub fn track_all(&mut self, elements: &[web::Element], channel: Channel) -> usize {
        let base = self.next_track;
        for el in elements {
            self.track(el, channel);
        }
        base
    }

    pub fn on_mark(&mut self, id: usize, handler: impl FnMut() + 'static) {
        self.mark_handlers.push((id, Box::new(handler)));
    }

    /// Write the state at time `t` into the bound elements.
    pub fn apply(&mut self, t: f64) {
        // Transform channels on the same element compose into one string.
        let mut handled = vec![false; self.bindings.len()];
        for i in 0..self.bindings.len() {
            if handled[i] {
                continue;
            }
            let el = self.bindings[i].element.clone();
            let mut transform = String::new();
            for j in i..self.bindings.len() {
                if handled[j] || self.bindings[j].element != el {
                    continue;
                }
                handled[j] = true;
                let b = &self.bindings[j];
                let Some(v) = self.timeline.value(b.track, t) else {
                    continue;
                };
                match b.channel {
                    Channel::Opacity => dom::set_style(&el, "opacity", &format!("{v:.4}")),
                    Channel::LeftPct => dom::set_style(&el, "left", &format!("{v:.3}%")),
                    Channel::X => transform.push_str(&format!("translateX({v:.2}px) ")),
                    Channel::Y => transform.push_str(&format!("translateY({v:.2}px) ")),
                    Channel::YPct => transform.push_str(&format!("translateY({v:.2}%) ")),
                    Channel::Scale => transform.push_str(&format!("scale({v:.4}) ")),
                    Channel::ScaleX => transform.push_str(&format!("scaleX({v:.4}) ")),
                    Channel::RotateX => transform.push_str(&format!("rotateX({v:.2}deg) ")),
                    Channel::Rotate => transform.push_str(&format!("rotate({v:.2}deg) ")),
                }
            }
            if !transform.is_empty() {
                dom::set_style(&el, "transform", transform.trim_end());
            }
        }
    }

    /// Run the timeline from `t = 0` on its own frame loop, firing mark
    /// handlers as their times pass. The loop retires itself at the end.
    pub fn play(self) {
        let mut player = self;
        let started = Instant::now();
        let mut prev_t = 0.0_f64;
        frame::run_while(move || {
            let t = started.elapsed().as_secs_f64();
            player.apply(t);
            for id in player.timeline.marks_crossed(prev_t, t) {
                for (mid, handler) in player.mark_handlers.iter_mut() {
                    if *mid == id {
                        handler();
                    }
                }
            }
            prev_t = t;
            !player.timeline.finished(t)
        });
    }
}
