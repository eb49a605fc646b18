// Shared tuning constants for the ink trail. Lengths are logical (CSS) pixels,
// times are milliseconds.

// Pool
pub const MAX_BLOBS: usize = 200;

// Pointer easing
pub const BASE_SMOOTHING: f32 = 0.15; // fraction of the remaining gap closed per tick

// Blob sizing and lifetime
pub const MIN_RADIUS: f32 = 3.5;
pub const MAX_RADIUS: f32 = 8.5;
pub const MIN_LIFE: f32 = 280.0;
pub const MAX_LIFE: f32 = 620.0;
pub const LIFE_FLOOR: f32 = 16.0; // smallest accepted min_life override, one frame
pub const RADIUS_JITTER: f32 = 0.15; // +/- fraction applied to the speed-derived radius
pub const SPEED_RADIUS_GAIN: f32 = 12.0; // speed (px/ms) at 1/12 already gives MAX_RADIUS

// Head blob multipliers
pub const HEAD_RADIUS_SCALE: f32 = 1.4;
pub const HEAD_LIFE_SCALE: f32 = 0.72;

// Distance-metered emission
pub const MIN_SPACING: f32 = 1.5;
pub const MAX_SPACING: f32 = 9.0;
pub const SPACING_FLOOR: f32 = 0.5; // smallest accepted min_spacing override
pub const SPEED_SPACING_GAIN: f32 = 20.0;
pub const MIN_MOVE_DISTANCE: f32 = 0.05; // per tick, below this no emission
pub const MIN_SEGMENT_DISTANCE: f32 = 0.001;
pub const MIN_DELTA_MS: f32 = 0.001;

// Decay
pub const EXPONENTIAL_TAPER: f32 = 3.2;
pub const PULSE_AMPLITUDE: f32 = 0.03;
pub const PULSE_FREQUENCY_MIN: f32 = 0.008; // rad/ms
pub const PULSE_FREQUENCY_SPAN: f32 = 0.008;
pub const MIN_VISIBLE_RADIUS: f32 = 0.35;
pub const MIN_VISIBLE_ALPHA: f32 = 0.015;

// Rendering
pub const DRAW_JITTER: f32 = 1.2; // max offset per axis, render only
pub const GRADIENT_MID_OFFSET: f32 = 0.55;
pub const GRADIENT_CORE_ALPHA: f32 = 0.72;
pub const GRADIENT_MID_ALPHA: f32 = 0.36;
