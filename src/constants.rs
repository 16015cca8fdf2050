/// Dot-field, navigation, typewriter and form tuning constants.
///
/// These keep magic numbers out of the behaviour code. Distances are CSS
/// pixels, times are milliseconds unless the name says otherwise.
// Grid layout
pub const GRID_SPACING: f32 = 45.0;
pub const DOT_RADIUS: f32 = 1.5;

// Floating motion
pub const FLOAT_RANGE: f32 = 8.0; // max drift from home on each axis
pub const FLOAT_RANGE_MIN_FACTOR: f32 = 0.5; // per-dot amplitude = range * [0.5, 1.0)
pub const FLOAT_SPEED: f32 = 0.015; // per-frame phase step = speed * [1, 2)

// Fade cycle
pub const FRAME_TIME_MS: f32 = 16.0; // fixed timer increment, ~60Hz
pub const FADE_SPEED_MIN: f32 = 0.003;
pub const FADE_SPEED_SPAN: f32 = 0.005;
pub const INITIAL_FADE_DELAY_MAX_MS: f32 = 3000.0;
pub const FADE_DELAY_MIN_MS: f32 = 2000.0;
pub const FADE_DELAY_SPAN_MS: f32 = 4000.0;
pub const VISIBLE_TARGET_PROBABILITY: f64 = 0.7;

// Rendering
pub const CONNECTION_DISTANCE: f32 = 80.0;
pub const DOT_VISIBILITY_THRESHOLD: f32 = 0.05;
pub const CONNECTION_VISIBILITY_THRESHOLD: f32 = 0.1;
pub const DOT_ALPHA_SCALE: f32 = 0.5;
pub const LINE_ALPHA_SCALE: f32 = 0.3;
pub const LINE_WIDTH: f64 = 1.0;

// Theme
pub const THEME_CLEAR_DELAY_MS: i32 = 100;
pub const THEME_STORAGE_KEY: &str = "theme";

// Page
pub const BODY_FADE_IN_DELAY_MS: i32 = 100;

// Navigation
pub const NAVBAR_OFFSET_PX: f64 = 70.0; // fixed navbar height for anchor scrolling
pub const NAVBAR_HIDE_AFTER_PX: f64 = 100.0;
pub const SCROLL_TOP_SHOW_AFTER_PX: f64 = 500.0;
pub const ACTIVE_SECTION_LEAD_PX: f64 = 100.0;

// Typewriter
pub const TYPE_DELAY_MS: u32 = 150;
pub const DELETE_DELAY_MS: u32 = 100;
pub const PHRASE_HOLD_MS: u32 = 2000;
pub const NEXT_PHRASE_DELAY_MS: u32 = 500;
pub const TYPEWRITER_START_DELAY_MS: i32 = 1000;

// Project cards
pub const CARD_SHOW_DELAY_MS: i32 = 10;
pub const CARD_HIDE_DELAY_MS: i32 = 300;
pub const CARD_TILT_DIVISOR: f32 = 20.0;
pub const CARD_LIFT_PX: f32 = -10.0;

// Contact form
pub const NAME_MIN_CHARS: usize = 2;
pub const SUBJECT_MIN_CHARS: usize = 3;
pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SIMULATED_SUBMIT_MS: i32 = 2000;
pub const FEEDBACK_HIDE_MS: i32 = 5000;
