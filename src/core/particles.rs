use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

/// A line between two particles, with its distance-faded alpha weight.
#[derive(Clone, Copy, Debug)]
pub struct Link {
    pub a: Vec2,
    pub b: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
    bounds: Vec2,
    link_dist: f32,
}

impl ParticleField {
    pub fn new(
        rng: &mut impl Rng,
        count: usize,
        bounds: Vec2,
        speed: f32,
        max_size: f32,
        link_dist: f32,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.gen_range(0.0..bounds.x.max(1.0)),
                    rng.gen_range(0.0..bounds.y.max(1.0)),
                ),
                vel: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * speed,
                    (rng.gen::<f32>() - 0.5) * speed,
                ),
                size: rng.gen::<f32>() * max_size + 1.0,
            })
            .collect();
        Self {
            particles,
            bounds,
            link_dist,
        }
    }

    /// Resize the field without reseeding; positions stay where they are and
    /// bounce off the new bounds on the next step.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    /// Advance one frame: drift, then reverse the offending velocity
    /// component at each boundary crossing.
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > self.bounds.x {
                p.vel.x = -p.vel.x;
            }
            if p.pos.y < 0.0 || p.pos.y > self.bounds.y {
                p.vel.y = -p.vel.y;
            }
        }
    }

    /// Connecting lines between all pairs within the link distance.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = self.particles[i].pos;
                let b = self.particles[j].pos;
                let dist = a.distance(b);
                if dist < self.link_dist {
                    out.push(Link {
                        a,
                        b,
                        alpha: 0.2 * (1.0 - dist / self.link_dist),
                    });
                }
            }
        }
        out
    }
}

/// Random initial styling for one DOM drift particle.
#[derive(Clone, Copy, Debug)]
pub struct DriftSpec {
    pub size_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub opacity: f32,
    pub rise_px: f32,
    pub sway_px: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

/// Spec for looping DOM particles: size/position/opacity randomized, each
/// drifting upward with a random sway, duration, and start delay.
pub fn drift_spec(
    rng: &mut impl Rng,
    size_range: (f32, f32),
    rise_base: f32,
    rise_span: f32,
    sway_span: f32,
    duration_base: f32,
    duration_span: f32,
    delay_span: f32,
) -> DriftSpec {
    DriftSpec {
        size_px: rng.gen::<f32>() * (size_range.1 - size_range.0) + size_range.0,
        left_pct: rng.gen::<f32>() * 100.0,
        top_pct: rng.gen::<f32>() * 100.0,
        opacity: rng.gen::<f32>() * 0.5 + 0.2,
        rise_px: rise_base + rng.gen::<f32>() * rise_span,
        sway_px: (rng.gen::<f32>() - 0.5) * sway_span,
        duration_sec: duration_base + rng.gen::<f32>() * duration_span,
        delay_sec: rng.gen::<f32>() * delay_span,
    }
}
