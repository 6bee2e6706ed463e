/// Exponential-out curve used by the smooth scroll interpolation.
/// Matches `min(1, 1.001 - 2^(-10 t))`; slightly overshoots toward 1.0 so
/// the tail of a scroll ease terminates instead of approaching forever.
#[inline]
pub fn expo_out(t: f64) -> f64 {
    (1.001 - (2.0_f64).powf(-10.0 * t)).min(1.0)
}

/// Quadratic ease-in-out (preloader counter ramp).
#[inline]
pub fn quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Quartic ease-out (entrance tweens).
#[inline]
pub fn quart_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// Quartic ease-in-out (panel wipes).
#[inline]
pub fn quart_in_out(t: f64) -> f64 {
    if t < 0.5 {
        8.0 * t * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
    }
}

/// Quadratic ease-out.
#[inline]
pub fn quad_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-out (journey stop cascade).
#[inline]
pub fn cubic_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Linear passthrough, for scrubbed tweens.
#[inline]
pub fn linear(t: f64) -> f64 {
    t
}

/// Frame-rate independent smoothing weight for `value += (target - value) * a`
/// given a time constant in seconds.
#[inline]
pub fn smoothing_alpha(dt_sec: f32, tau_sec: f32) -> f32 {
    1.0 - (-dt_sec / tau_sec).exp()
}
