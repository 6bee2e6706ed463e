/// Where a zone starts and ends, as fractions of viewport height measured
/// from the region's document-space top (and bottom for the end line).
///
/// `start_frac = 0.8` reads as "when the region top reaches 80% down the
/// viewport"; `end_frac` is relative to the region bottom, `1.0` meaning
/// "until the region bottom reaches the viewport top... plus one viewport".
#[derive(Clone, Copy, Debug)]
pub struct ZoneConfig {
    pub start_frac: f64,
    pub end_frac: f64,
    pub once: bool,
}

impl ZoneConfig {
    pub fn once_at(start_frac: f64) -> Self {
        Self {
            start_frac,
            end_frac: 0.0,
            once: true,
        }
    }

    pub fn toggling(start_frac: f64, end_frac: f64) -> Self {
        Self {
            start_frac,
            end_frac,
            once: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Entered,
    /// A fired `once` zone; further scroll never re-fires it.
    Terminal,
}

/// Transition reported by one `update` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoneEvent {
    None,
    Enter,
    Leave,
}

#[derive(Clone, Debug)]
pub struct TriggerZone {
    start_px: f64,
    end_px: f64,
    once: bool,
    phase: Phase,
    last_progress: Option<f64>,
    last_offset: Option<f64>,
}

impl TriggerZone {
    /// Build from measured region geometry. `region_top` is in document
    /// space; the viewport fractions convert to absolute scroll offsets.
    pub fn from_region(
        region_top: f64,
        region_height: f64,
        viewport_height: f64,
        config: ZoneConfig,
    ) -> Self {
        let start_px = region_top - viewport_height * config.start_frac;
        let end_px = region_top + region_height - viewport_height * config.end_frac;
        Self {
            start_px,
            end_px: end_px.max(start_px),
            once: config.once,
            phase: Phase::Idle,
            last_progress: None,
            last_offset: None,
        }
    }

    /// Re-measure after resize or content-height change; a terminal zone
    /// stays terminal.
    pub fn remeasure(
        &mut self,
        region_top: f64,
        region_height: f64,
        viewport_height: f64,
        config: ZoneConfig,
    ) {
        let next = Self::from_region(region_top, region_height, viewport_height, config);
        self.start_px = next.start_px;
        self.end_px = next.end_px;
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Advance against the current scroll offset. Returns the transition
    /// and, when the offset moved within (or just left) the zone, the
    /// clamped 0-1 progress to report to scrub consumers.
    pub fn update(&mut self, offset: f64) -> (ZoneEvent, Option<f64>) {
        let inside = offset >= self.start_px && offset <= self.end_px;
        // A single update can jump clear across the zone (anchor jump,
        // native-mode fling); that still counts as an entry.
        let crossed = self.last_offset.is_some_and(|prev| {
            (prev < self.start_px && offset > self.end_px)
                || (prev > self.end_px && offset < self.start_px)
        });
        self.last_offset = Some(offset);
        let event = match (self.phase, inside) {
            (Phase::Idle, true) => {
                self.phase = if self.once {
                    Phase::Terminal
                } else {
                    Phase::Entered
                };
                ZoneEvent::Enter
            }
            (Phase::Idle, false) if crossed => {
                // The next update outside the zone reports the Leave, so
                // enter/leave still alternate for toggling zones.
                self.phase = if self.once {
                    Phase::Terminal
                } else {
                    Phase::Entered
                };
                ZoneEvent::Enter
            }
            (Phase::Entered, false) => {
                self.phase = Phase::Idle;
                ZoneEvent::Leave
            }
            _ => ZoneEvent::None,
        };

        let span = self.end_px - self.start_px;
        let raw = if span > 0.0 {
            (offset - self.start_px) / span
        } else if offset >= self.start_px {
            1.0
        } else {
            0.0
        };
        let clamped = raw.clamp(0.0, 1.0);
        // Report progress while inside, plus one clamped value on any
        // transition taken outside the zone so scrubbed visuals settle at
        // an endpoint.
        let progress = if inside || event != ZoneEvent::None {
            if self.last_progress == Some(clamped) && event == ZoneEvent::None {
                None
            } else {
                self.last_progress = Some(clamped);
                Some(clamped)
            }
        } else {
            None
        };
        (event, progress)
    }
}
