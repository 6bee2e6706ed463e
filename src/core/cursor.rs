use glam::Vec2;

#[derive(Clone, Copy, Debug, Default)]
pub struct RingTransform {
    pub angle_rad: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

#[derive(Clone, Debug)]
pub struct CursorSim {
    pub mouse: Vec2,
    pub dot: Vec2,
    pub ring: Vec2,
    pub glow: Vec2,
    last_mouse: Vec2,
    pub hover_scale: f32,
    dot_follow: f32,
    ring_follow: f32,
    glow_follow: f32,
    speed_max: f32,
    stretch_x: f32,
    stretch_y: f32,
}

impl CursorSim {
    pub fn new(
        dot_follow: f32,
        ring_follow: f32,
        glow_follow: f32,
        speed_max: f32,
        stretch_x: f32,
        stretch_y: f32,
    ) -> Self {
        Self {
            mouse: Vec2::ZERO,
            dot: Vec2::ZERO,
            ring: Vec2::ZERO,
            glow: Vec2::ZERO,
            last_mouse: Vec2::ZERO,
            hover_scale: 1.0,
            dot_follow,
            ring_follow,
            glow_follow,
            speed_max,
            stretch_x,
            stretch_y,
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.mouse = Vec2::new(x, y);
    }

    /// One frame step: advances all layers and returns the ring transform
    /// derived from the pointer's per-frame velocity.
    pub fn step(&mut self) -> RingTransform {
        let delta = self.mouse - self.last_mouse;
        let speed = delta.length().min(self.speed_max);
        let angle = if delta == Vec2::ZERO {
            0.0
        } else {
            delta.y.atan2(delta.x)
        };
        let stretch = speed / self.speed_max;
        self.last_mouse = self.mouse;

        self.dot += (self.mouse - self.dot) * self.dot_follow;
        self.ring += (self.mouse - self.ring) * self.ring_follow;
        self.glow += (self.mouse - self.glow) * self.glow_follow;

        RingTransform {
            angle_rad: angle,
            scale_x: (1.0 + stretch * self.stretch_x) * self.hover_scale,
            scale_y: (1.0 - stretch * self.stretch_y) * self.hover_scale,
        }
    }
}

/// Pointer-offset parallax used by the hero playground and gradient drift:
/// a target derived from the pointer's position within a region, approached
/// with a fixed follow weight each frame.
#[derive(Clone, Debug, Default)]
pub struct PointerDrift {
    pub target: Vec2,
    pub current: Vec2,
    follow: f32,
    range: f32,
}

impl PointerDrift {
    pub fn new(follow: f32, range: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            current: Vec2::ZERO,
            follow,
            range,
        }
    }

    /// `u`/`v` are the pointer's offset from the region center, normalized
    /// to -0.5..0.5 of the region size; the drift range scales them to px.
    pub fn set_pointer_uv(&mut self, u: f32, v: f32) {
        self.target = Vec2::new(u, v) * self.range;
    }

    pub fn clear(&mut self) {
        self.target = Vec2::ZERO;
    }

    pub fn step(&mut self) -> Vec2 {
        self.current += (self.target - self.current) * self.follow;
        self.current
    }
}
