// Effect tuning constants

// Cursor layer follow weights (per-frame exponential smoothing factors)
pub const CURSOR_DOT_FOLLOW: f32 = 0.2;
pub const CURSOR_RING_FOLLOW: f32 = 0.1;
pub const CURSOR_GLOW_FOLLOW: f32 = 0.06;

// Pointer speed clamp for the ring stretch (px per frame)
pub const CURSOR_SPEED_MAX: f32 = 60.0;
pub const CURSOR_STRETCH_X: f32 = 0.35;
pub const CURSOR_STRETCH_Y: f32 = 0.15;
pub const CURSOR_HOVER_SCALE: f32 = 1.35;

// Minimum viewport width for the custom cursor
pub const CURSOR_MIN_WIDTH: f64 = 1024.0;

// Smooth scroll multipliers and ease durations
pub const SCROLL_WHEEL_MULTIPLIER: f64 = 0.9;
pub const SCROLL_TOUCH_MULTIPLIER: f64 = 1.8;
pub const SCROLL_DURATION_SEC: f64 = 1.4;
pub const SCROLL_DURATION_MOBILE_SEC: f64 = 0.8;
pub const MOBILE_WIDTH_PX: f64 = 768.0;

// Anchor links, back-to-top, navbar thresholds
pub const ANCHOR_SCROLL_OFFSET: f64 = -100.0;
pub const ANCHOR_SCROLL_DURATION_SEC: f64 = 1.5;
pub const BACK_TO_TOP_DURATION_SEC: f64 = 1.2;
pub const NAVBAR_SCROLLED_AT: f64 = 100.0;
pub const BACK_TO_TOP_VISIBLE_AT: f64 = 600.0;

// Preloader counter ramp
pub const PRELOAD_COUNT_DURATION_SEC: f64 = 2.5;

// Hero playground pointer parallax (px per full region width of offset)
pub const PLAYGROUND_RANGE_PX: f32 = 30.0;
pub const PLAYGROUND_FOLLOW: f32 = 0.08;

// Hero gradient drift
pub const GRADIENT_RANGE_PX: f32 = 50.0;
pub const GRADIENT_FOLLOW: f32 = 0.1;

// Magnetic pull as a fraction of the offset from element center
pub const MAGNETIC_STRENGTH: f32 = 0.2;

// Card tilt maximum angle (degrees)
pub const TILT_MAX_DEG: f32 = 10.0;

// Image distortion hover
pub const DISTORT_SCALE: f32 = 1.1;
pub const DISTORT_RANGE_PX: f32 = 10.0;

// Orbit constellation
pub const ORBIT_DEFAULT_RADIUS: f32 = 180.0;

// Canvas particle fields
pub const HERO_PARTICLE_COUNT: usize = 60;
pub const HERO_PARTICLE_SPEED: f32 = 0.3;
pub const BEYOND_PARTICLE_COUNT: usize = 40;
pub const BEYOND_PARTICLE_SPEED: f32 = 0.4;
pub const PARTICLE_LINK_DIST: f32 = 100.0;

// DOM drift particle counts
pub const HERO_DRIFT_COUNT: usize = 30;
pub const BEYOND_DRIFT_COUNT: usize = 20;

// Counter animation step policy
pub const COUNTER_STEPS: u32 = 50;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

// Scramble frame windows
pub const SCRAMBLE_WINDOW_MAX: u32 = 40;
pub const SCRAMBLE_CHURN_CHANCE: f64 = 0.28;
pub const SCRAMBLE_STAGGER_MS: i32 = 200;

// Form submission endpoint and button label revert delay
pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";
pub const FORM_REVERT_MS: i32 = 2000;

// Delay before the heavier post-load effect wave
pub const MODERN_EFFECTS_DELAY_MS: i32 = 500;

// Analyser bars on the hero canvas
pub const AUDIO_BAR_COUNT: usize = 60;
pub const AUDIO_FFT_SIZE: u32 = 256;

// Pointer trail motes
pub const TRAIL_MAX_MOTES: usize = 15;
pub const TRAIL_SPAWN_GAP_MS: f64 = 60.0;
pub const TRAIL_LIFE_MS: i32 = 800;

// Cursor comet trail
pub const COMET_MAX_MOTES: usize = 10;
pub const COMET_SPAWN_GAP_MS: f64 = 60.0;
pub const COMET_LIFE_MS: i32 = 1000;
pub const COMET_IDLE_MS: i32 = 120;
