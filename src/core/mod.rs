//! Pure effect logic, free of platform APIs.
//!
//! Everything here runs on both wasm and the host; the host-side tests in
//! `tests/` include these files directly since the crate itself only builds
//! for wasm. The files start with plain items so they stay valid inside an
//! `include!` wrapper module.

/// Static case-study display data, keyed by the card's `data-case` id.
pub mod case_studies;
/// Stat counter animation: parses the display text into a numeric target
/// plus suffix flags (K, M, +), then steps toward it over a fixed step
/// count. Intermediate frames render `floor(v * 10) / 10` with suffixes;
/// the terminal frame renders the exact parsed number. Non-numeric labels
/// ("Top 10") are skipped.
pub mod counter;
/// Cursor follower simulation: three positional layers trail the raw
/// pointer with distinct follow weights, and the ring derives a
/// stretch/rotation from instantaneous pointer velocity.
pub mod cursor;
/// Easing curves shared by the scroll model and the animation timelines.
pub mod ease;
/// Contact form submission phases; the submit control's label and disabled
/// state are a function of the phase.
pub mod form;
/// Lightbox gallery navigation: one open index, bounds-checked prev/next,
/// no wraparound.
pub mod gallery;
/// Constellation ring placement as CSS percentage coordinates.
pub mod orbit;
/// Canvas particle field: random position/velocity/size, velocity reversal
/// at the bounds, connecting lines under the link distance.
pub mod particles;
/// Text scramble cipher: per-index random frame windows churning random
/// symbols until the new character locks in.
pub mod scramble;
/// Smoothed scroll offset model, eased toward a target with an
/// exponential-out curve; retargeting restarts the ease from the current
/// value so motion never jumps.
pub mod scroll;
/// Sequenced tween timeline with explicit relative offsets, including
/// negative offsets that overlap the previous step.
pub mod timeline;
/// Scroll trigger zone state machine: enter/leave transitions plus scrub
/// progress over the zone's offset interval.
pub mod trigger;
