/// Motion and page-effect tuning constants.
///
/// These constants express intended behavior (smoothing factors, angle
/// limits, timings) and keep magic numbers out of the wiring code.
// Per-frame smoothing factors: fraction of the remaining gap closed each frame
pub const DOT_SMOOTHING: f32 = 0.15;
pub const RING_SMOOTHING: f32 = 0.08;
pub const TILT_SMOOTHING: f32 = 0.025; // heavy, cinematic lag

// 3D tilt
pub const TILT_MAX_ROTATE_Y_DEG: f32 = 18.0; // left/right
pub const TILT_MAX_ROTATE_X_DEG: f32 = 10.0; // up/down
pub const TILT_PARALLAX_SCALE: f32 = 0.5; // px of translation per degree of rotation

// Hero glow follows the pointer around the centre of its container
pub const GLOW_CENTER_PERCENT: f32 = 50.0;
pub const GLOW_SPAN_PERCENT: f32 = 15.0;

// Loader and hero entry (milliseconds)
pub const LOADER_HIDE_DELAY_MS: i32 = 2800;
pub const HERO_REVEAL_STAGGER_MS: i32 = 200;
pub const PRODUCT_ENTRY_DELAY_MS: i32 = 500;
pub const PRODUCT_ENTRY_SETTLE_MS: i32 = 1500;
pub const PRODUCT_ENTRY_FROM_TRANSFORM: &str = "scale(0.85) rotateX(15deg) translateY(40px)";
pub const PRODUCT_ENTRY_TO_TRANSFORM: &str = "scale(1) rotateX(0deg) translateY(0px)";
pub const PRODUCT_ENTRY_TRANSITION: &str =
    "opacity 1.5s cubic-bezier(0.16, 1, 0.3, 1), transform 2s cubic-bezier(0.16, 1, 0.3, 1)";

// Navigation
pub const NAV_SCROLLED_THRESHOLD_PX: f64 = 80.0;
pub const NAV_SECTION_PROBE_OFFSET_PX: f64 = 200.0;
pub const NAV_ACTIVE_COLOR: &str = "var(--accent)";

// Intersection thresholds
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const COUNTER_THRESHOLD: f64 = 0.5;
pub const RING_THRESHOLD: f64 = 0.5;

// Counters and rings
pub const COUNTER_DURATION_MS: f64 = 2000.0;
pub const RING_CIRCUMFERENCE: f64 = 339.29; // 2 * PI * r for r = 54

// Scroll parallax (px of offset per px scrolled)
pub const BG_TEXT_PARALLAX: f64 = 0.2;
pub const GLOW_SCROLL_PARALLAX: f64 = 0.15;

// Card tilt
pub const CARD_TILT_MAX_DEG: f64 = 8.0;
pub const CARD_PERSPECTIVE_PX: f64 = 800.0;
pub const CARD_LIFT_PX: f64 = 4.0;

// Carousel drag
pub const CAROUSEL_DRAG_SPEED: f64 = 1.5;
