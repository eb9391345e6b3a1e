//! Tuning constants for the heart field.
//!
//! These keep magic numbers out of the simulation code. `SceneParams::default`
//! is built from them, so changing a value here changes the shipped scene.

// Heart curve
pub const HEART_SCALE: f32 = 15.0; // curve units -> pixels
pub const HEART_DEPTH: f32 = 20.0; // full width of the random z band

// Population
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const PARTICLE_COUNT_MOBILE: usize = 1000;
pub const PARTICLE_COUNT_DESKTOP: usize = 1800;

// Particle look
pub const PARTICLE_SIZE_MAX: f32 = 2.0;
pub const PARTICLE_HUE_BASE: f32 = 340.0;
pub const PARTICLE_HUE_SPAN: f32 = 20.0;
pub const PARTICLE_SATURATION: f32 = 100.0;
pub const PARTICLE_LIGHTNESS: f32 = 60.0;

// Idle motion
pub const PULSE_FREQUENCY: f32 = 3.0; // radians of sim time
pub const PULSE_AMPLITUDE: f32 = 0.05;
pub const SEEK_FACTOR: f32 = 0.1; // fraction of remaining distance per frame

// Celebration motion
pub const CELEBRATION_JITTER: f32 = 4.0; // per-axis delta in [-J, J]

// Projection
pub const FOCAL_LENGTH: f32 = 600.0;
pub const PROJECTION_EPSILON: f32 = 1e-6;

// Camera
pub const CAMERA_DRIFT_Y: f32 = 0.003; // radians per frame
pub const CAMERA_SMOOTHING: f32 = 0.05;
pub const POINTER_GAIN: f32 = 0.001; // radians per pixel off-centre

// Frame loop
pub const SIM_TIME_STEP: f32 = 0.02;
pub const TRAIL_COLOR: [u8; 3] = [15, 2, 5];
pub const TRAIL_ALPHA: f32 = 0.3;

// Evasive button
pub const EVASION_PADDING_PX: f32 = 20.0;
pub const EVASION_SCALE_STEP: f32 = 0.1;
pub const DECLINE_PHRASES: &[&str] = &[
    "No",
    "Are you sure?",
    "Really?",
    "Think again!",
    "Last chance!",
    "Please?",
    "I have snacks!",
];
