// Shared visual tuning constants for the ring visualizer and dashboard.

// Per-frame smoothing factors (fraction of the remaining distance covered each frame)
pub const SESSION_SMOOTHING: f64 = 0.05;
pub const SET_SMOOTHING: f64 = 0.05;
pub const SCORE_SMOOTHING: f64 = 0.04; // slightly slower so the inner ring lags the others

// Ambient motion
pub const ROTATION_STEP_RAD: f64 = 0.002; // background grid rotation per frame
pub const PULSE_TIME_DIVISOR_MS: f64 = 500.0; // pulse = (sin(t / divisor) + 1) / 2

// Ring layout (fractions of the square surface size)
pub const BASE_RADIUS_FRACTION: f64 = 0.40;
pub const RING_STROKE_FRACTION: f64 = 0.035;
pub const RING_START_DEG: f64 = 145.0;
pub const RING_SPAN_DEG: f64 = 250.0;
pub const SESSION_RING_RADIUS: f64 = 1.0;
pub const SET_RING_RADIUS: f64 = 0.85;
pub const SCORE_RING_RADIUS: f64 = 0.70;

// Ring hue ramps (degrees): violet, magenta, amber
pub const SESSION_HUES: (f64, f64) = (240.0, 260.0);
pub const SET_HUES: (f64, f64) = (310.0, 340.0);
pub const SCORE_HUES: (f64, f64) = (30.0, 50.0);
pub const GRADIENT_START_LIGHTNESS: f64 = 50.0;
pub const GRADIENT_END_LIGHTNESS: f64 = 60.0;

// Light-tube stroke layering
pub const TRACK_ALPHA: f64 = 0.05;
pub const GLOW_BLUR: f64 = 20.0;
pub const CORE_BLUR: f64 = 5.0;
pub const CORE_WIDTH_FRACTION: f64 = 0.3;
pub const CORE_ALPHA: f64 = 0.8;

// Background grid
pub const GRID_ELLIPSES: usize = 5;
pub const GRID_RADIUS_X: f64 = 1.1; // relative to base radius
pub const GRID_RADIUS_Y: f64 = 0.6;
pub const GRID_COLOR: [u8; 3] = [217, 70, 239];
pub const GRID_ALPHA: f64 = 0.1;
pub const GRID_LINE_WIDTH: f64 = 1.0;

// Particle field
pub const PARTICLE_COUNT: usize = 40;
pub const PARTICLE_SIZE_MAX: f64 = 1.5;
pub const PARTICLE_SPEED_MIN: f64 = 0.005;
pub const PARTICLE_SPEED_MAX: f64 = 0.015;
pub const PARTICLE_ORBIT_MIN: f64 = 0.4;
pub const PARTICLE_ORBIT_MAX: f64 = 0.9;
pub const PARTICLE_BAND: f64 = 0.8; // orbit band relative to base radius
pub const PARTICLE_ALPHA_SCALE: f64 = 0.8;

// Boot splash timings (ms after boot start)
pub const BOOT_STEP_1_MS: u32 = 500;
pub const BOOT_STEP_2_MS: u32 = 1200;
pub const BOOT_STEP_3_MS: u32 = 2000;
pub const BOOT_COMPLETE_MS: u32 = 2800;

// Score above which the tracker reports a consistent streak
pub const CONSISTENT_SCORE_THRESHOLD: f64 = 80.0;
