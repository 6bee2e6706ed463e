pub type EaseFn = fn(f64) -> f64;

/// Placement of a new step relative to what is already on the timeline.
#[derive(Clone, Copy, Debug)]
pub enum At {
    /// After the end of the latest step so far.
    End,
    /// Offset from the end of the latest step; negative overlaps it.
    EndOffset(f64),
    /// Aligned with the start of the previously added step.
    WithPrev,
    /// Absolute time from the timeline start.
    Abs(f64),
}

#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub track: usize,
    pub from: f64,
    pub to: f64,
    pub start: f64,
    pub duration: f64,
    pub ease: EaseFn,
}

#[derive(Clone, Default)]
pub struct Timeline {
    tweens: Vec<Tween>,
    marks: Vec<(f64, usize)>,
    end: f64,
    prev_start: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolve(&self, at: At) -> f64 {
        let t = match at {
            At::End => self.end,
            At::EndOffset(off) => self.end + off,
            At::WithPrev => self.prev_start,
            At::Abs(t) => t,
        };
        t.max(0.0)
    }

    /// Add one tween. Returns `self` for chaining.
    pub fn add(
        &mut self,
        track: usize,
        from: f64,
        to: f64,
        duration: f64,
        ease: EaseFn,
        at: At,
    ) -> &mut Self {
        let start = self.resolve(at);
        self.tweens.push(Tween {
            track,
            from,
            to,
            start,
            duration,
            ease,
        });
        self.prev_start = start;
        self.end = self.end.max(start + duration);
        self
    }

    /// Add one tween per track in `base..base + count`, each offset from the
    /// previous by `stagger` seconds.
    pub fn add_stagger(
        &mut self,
        base: usize,
        count: usize,
        from: f64,
        to: f64,
        duration: f64,
        stagger: f64,
        ease: EaseFn,
        at: At,
    ) -> &mut Self {
        let first = self.resolve(at);
        for i in 0..count {
            let start = first + stagger * i as f64;
            self.tweens.push(Tween {
                track: base + i,
                from,
                to,
                start,
                duration,
                ease,
            });
            self.end = self.end.max(start + duration);
        }
        self.prev_start = first;
        self
    }

    /// Hold: advances the end cursor without animating anything.
    pub fn hold(&mut self, duration: f64) -> &mut Self {
        self.prev_start = self.end;
        self.end += duration;
        self
    }

    /// Record a completion mark the caller can poll for with
    /// [`Timeline::marks_crossed`].
    pub fn mark(&mut self, id: usize, at: At) -> &mut Self {
        let t = self.resolve(at);
        self.marks.push((t, id));
        self
    }

    pub fn duration(&self) -> f64 {
        self.end
    }

    pub fn finished(&self, t: f64) -> bool {
        t >= self.end && self.marks.iter().all(|(mt, _)| t >= *mt)
    }

    /// Value of one tween at absolute time `t`.
    fn tween_value(tw: &Tween, t: f64) -> f64 {
        if tw.duration <= 0.0 || t >= tw.start + tw.duration {
            return tw.to;
        }
        let p = ((t - tw.start) / tw.duration).clamp(0.0, 1.0);
        tw.from + (tw.to - tw.from) * (tw.ease)(p)
    }

    /// Current value of a track: the latest-starting tween that has begun
    /// wins; before any tween begins the first tween's `from` holds.
    pub fn value(&self, track: usize, t: f64) -> Option<f64> {
        let mut first: Option<&Tween> = None;
        let mut active: Option<&Tween> = None;
        for tw in self.tweens.iter().filter(|tw| tw.track == track) {
            if first.map_or(true, |f| tw.start < f.start) {
                first = Some(tw);
            }
            if t >= tw.start && active.map_or(true, |a| tw.start >= a.start) {
                active = Some(tw);
            }
        }
        match (active, first) {
            (Some(tw), _) => Some(Self::tween_value(tw, t)),
            (None, Some(f)) => Some(f.from),
            (None, None) => None,
        }
    }

    /// Mark ids whose times lie in `(prev_t, t]`.
    pub fn marks_crossed(&self, prev_t: f64, t: f64) -> Vec<usize> {
        self.marks
            .iter()
            .filter(|(mt, _)| *mt > prev_t && *mt <= t)
            .map(|(_, id)| *id)
            .collect()
    }

    /// All track ids touched by this timeline.
    pub fn tracks(&self) -> Vec<usize> {
        let mut ids: Vec<usize> = self.tweens.iter().map(|tw| tw.track).collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }
}
