// Host-side tests for effect constants and their relationships.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn follow_weights_are_valid_smoothing_factors() {
    for w in [CURSOR_DOT_FOLLOW, CURSOR_RING_FOLLOW, CURSOR_GLOW_FOLLOW] {
        assert!(w > 0.0 && w <= 1.0);
    }
    // Layers trail progressively looser from dot to glow.
    assert!(CURSOR_DOT_FOLLOW > CURSOR_RING_FOLLOW);
    assert!(CURSOR_RING_FOLLOW > CURSOR_GLOW_FOLLOW);
    assert!(PLAYGROUND_FOLLOW > 0.0 && PLAYGROUND_FOLLOW <= 1.0);
    assert!(GRADIENT_FOLLOW > 0.0 && GRADIENT_FOLLOW <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cursor_stretch_stays_positive_at_the_speed_cap() {
    assert!(CURSOR_SPEED_MAX > 0.0);
    // Full-speed squash must not invert the ring.
    assert!(CURSOR_STRETCH_Y < 1.0);
    assert!(CURSOR_STRETCH_X > 0.0);
    assert!(CURSOR_HOVER_SCALE >= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scroll_tuning_is_consistent() {
    assert!(SCROLL_WHEEL_MULTIPLIER > 0.0);
    assert!(SCROLL_TOUCH_MULTIPLIER > SCROLL_WHEEL_MULTIPLIER);
    assert!(SCROLL_DURATION_MOBILE_SEC < SCROLL_DURATION_SEC);
    assert!(MOBILE_WIDTH_PX < CURSOR_MIN_WIDTH);
    assert!(ANCHOR_SCROLL_OFFSET < 0.0);
    assert!(BACK_TO_TOP_VISIBLE_AT > NAVBAR_SCROLLED_AT);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn animation_policies_are_positive_and_bounded() {
    assert!(COUNTER_STEPS > 0);
    assert!(COUNTER_DURATION_MS > 0.0);
    assert!(SCRAMBLE_WINDOW_MAX > 0);
    assert!(SCRAMBLE_CHURN_CHANCE >= 0.0 && SCRAMBLE_CHURN_CHANCE <= 1.0);
    assert!(PRELOAD_COUNT_DURATION_SEC > 0.0);
    assert!(FORM_REVERT_MS > 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_budgets_are_sane() {
    assert!(HERO_PARTICLE_COUNT > 0);
    assert!(BEYOND_PARTICLE_COUNT > 0);
    assert!(PARTICLE_LINK_DIST > 0.0);
    assert!(TRAIL_MAX_MOTES > 0);
    assert!(COMET_MAX_MOTES > 0);
    assert!(TRAIL_SPAWN_GAP_MS > 0.0);
    assert!(COMET_SPAWN_GAP_MS > 0.0);
    // A mote must outlive the gap between spawns or the trail flickers.
    assert!(TRAIL_LIFE_MS as f64 > TRAIL_SPAWN_GAP_MS);
    assert!(COMET_LIFE_MS as f64 > COMET_SPAWN_GAP_MS);
    assert!(COMET_IDLE_MS < COMET_LIFE_MS);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_bars_fit_the_frequency_bins() {
    // fft size 256 yields 128 bins; every bar needs at least one.
    assert!(AUDIO_FFT_SIZE.is_power_of_two());
    assert!(AUDIO_BAR_COUNT <= (AUDIO_FFT_SIZE / 2) as usize);
}
