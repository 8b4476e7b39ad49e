/// Carousel interaction and layout tuning constants.
///
/// Angles are in degrees, distances in CSS pixels, durations in seconds
/// unless the name says otherwise.
// Pointer travel (px) to rotation (deg)
pub const DRAG_SENSITIVITY: f32 = 0.1;

// Inertia
pub const INERTIA_DECAY: f32 = 0.95; // per tick
pub const INERTIA_STOP_THRESHOLD: f32 = 0.5; // px per tick, both axes
pub const INERTIA_TICK_MS: i32 = 17;

// Camera tilt, kept within [TILT_MIN, TILT_MAX] so the view never flips
pub const TILT_MIN: f32 = 0.0;
pub const TILT_MAX: f32 = 180.0;
pub const INITIAL_TILT: f32 = 10.0;
pub const INITIAL_YAW: f32 = 0.0;

// Wheel zoom
pub const WHEEL_RADIUS_STEP: f32 = 10.0;
pub const RADIUS_MIN: f32 = 50.0;
pub const RADIUS_MAX: f32 = 2000.0;
pub const ZOOM_RELAYOUT_DELAY_SEC: f32 = 0.2;

// Panel layout
pub const PANEL_TRANSITION_SEC: f32 = 1.0;
pub const STAGGER_DIVISOR: f32 = 4.0; // delay = (count - index) / STAGGER_DIVISOR
pub const INTRO_DELAY_MS: i32 = 1000;

// Ground disc is this many radii wide
pub const GROUND_RADIUS_FACTOR: f32 = 3.0;
