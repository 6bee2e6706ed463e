use super::ease;

/// Whether the smoothed scroll driver should run at all. Reduced motion
/// wins over everything; coarse pointers keep native scrolling because
/// touch flings feel wrong re-eased.
pub fn smooth_scroll_enabled(reduced_motion: bool, coarse_pointer: bool) -> bool {
    !reduced_motion && !coarse_pointer
}

/// Input device class; touch drags are configured more responsive than
/// wheel deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Wheel,
    Touch,
}

#[derive(Clone, Debug)]
pub struct ScrollModel {
    current: f64,
    from: f64,
    target: f64,
    elapsed: f64,
    duration: f64,
    max_scroll: f64,
    wheel_multiplier: f64,
    touch_multiplier: f64,
    stopped: bool,
}

impl ScrollModel {
    pub fn new(duration_sec: f64, wheel_multiplier: f64, touch_multiplier: f64) -> Self {
        Self {
            current: 0.0,
            from: 0.0,
            target: 0.0,
            elapsed: duration_sec,
            duration: duration_sec,
            max_scroll: 0.0,
            wheel_multiplier,
            touch_multiplier,
            stopped: false,
        }
    }

    pub fn offset(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Update the scrollable extent; target and current are re-clamped.
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.target = self.target.clamp(0.0, self.max_scroll);
        self.current = self.current.clamp(0.0, self.max_scroll);
    }

    /// Freeze advancement (preloader, mobile menu, hidden tab). Input is
    /// ignored while stopped.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn start(&mut self) {
        self.stopped = false;
    }

    /// Apply a raw input delta, scaled by the device-class multiplier, and
    /// restart the ease toward the new target.
    pub fn apply_input(&mut self, delta: f64, kind: InputKind) {
        if self.stopped {
            return;
        }
        let mult = match kind {
            InputKind::Wheel => self.wheel_multiplier,
            InputKind::Touch => self.touch_multiplier,
        };
        self.retarget(self.target + delta * mult, self.duration);
    }

    /// Ease to an absolute offset over the given duration (anchor links,
    /// back-to-top).
    pub fn scroll_to(&mut self, target: f64, duration_sec: f64) {
        self.retarget(target, duration_sec.max(1e-3));
    }

    /// Jump without easing (scroll restoration).
    pub fn set_offset(&mut self, offset: f64) {
        let clamped = offset.clamp(0.0, self.max_scroll);
        self.current = clamped;
        self.from = clamped;
        self.target = clamped;
        self.elapsed = self.duration;
    }

    fn retarget(&mut self, target: f64, duration_sec: f64) {
        self.from = self.current;
        self.target = target.clamp(0.0, self.max_scroll);
        self.duration = duration_sec;
        self.elapsed = 0.0;
    }

    /// Advance by a frame delta. Returns the new offset when it changed.
    pub fn tick(&mut self, dt_sec: f64) -> Option<f64> {
        if self.stopped || self.elapsed >= self.duration {
            return None;
        }
        self.elapsed = (self.elapsed + dt_sec).min(self.duration);
        let t = self.elapsed / self.duration;
        let eased = ease::expo_out(t);
        let next = self.from + (self.target - self.from) * eased;
        if (next - self.current).abs() < f64::EPSILON && self.elapsed < self.duration {
            return None;
        }
        self.current = next;
        if self.elapsed >= self.duration {
            self.current = self.target;
            self.from = self.target;
        }
        Some(self.current)
    }

    /// Whether the ease has settled on its target.
    pub fn is_settled(&self) -> bool {
        self.elapsed >= self.duration
    }
}
