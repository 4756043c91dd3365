use glam::Vec3;

// Shared layout/animation tuning constants used by the core and the web frontend.

// Scene layout
pub const DEFAULT_RADIUS: f32 = 12.0;
pub const DEFAULT_COUNT: usize = 400;
pub const COUNT_MIN: usize = 50;
pub const COUNT_MAX: usize = 1000;
pub const COUNT_STEP: usize = 50;

// Soundtrack played once the user begins
pub const DEFAULT_AUDIO_URL: &str = "assets/music.mp3";

// Helix spacing
pub const HELIX_ANGLE_STEP: f32 = 0.2; // radians per item
pub const HELIX_RISE_STEP: f32 = 0.1; // world units per item (downwards)
pub const HELIX_CENTER_FACTOR: f32 = 0.05; // count * factor recentres the column

// Random scatter radial band: [RANDOM_MIN_FRACTION, 1) * radius
pub const RANDOM_MIN_FRACTION: f32 = 0.5;

// Heart volume
pub const HEART_SAMPLE_HALF_WIDTH: f32 = 1.5;
pub const HEART_SCALE: f32 = 0.8;

// Torus
pub const DONUT_RING_FACTOR: f32 = 0.8;
pub const DONUT_TUBE_FACTOR: f32 = 0.3;

// Audio ring
pub const WAVE_RING_FACTOR: f32 = 1.2;

// Per-card animation
pub const IDLE_FLOAT_AMPLITUDE: f32 = 0.1;
pub const WAVE_HEIGHT: f32 = 15.0; // offset at full amplitude
pub const WAVE_BLEND_PER_FRAME: f32 = 0.1;
pub const WAVE_SCALE_BOOST: f32 = 0.5; // extra scale at full amplitude
pub const BASE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.5;
pub const SCALE_RATE: f32 = 10.0; // lerp factor per second
pub const REFERENCE_FPS: f32 = 60.0; // frame rate the per-frame constants were tuned at

// Audio analysis
pub const FFT_SIZE: u32 = 256;
pub const AMPLITUDE_BINS: usize = (FFT_SIZE / 2) as usize;

// Card billboard (4:3)
pub const CARD_WIDTH: f32 = 1.6;
pub const CARD_HEIGHT: f32 = 1.2;
pub const CARD_OPACITY: f32 = 0.9;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 25.0);
pub const CAMERA_FOV_DEGREES: f32 = 60.0;
pub const CAMERA_MIN_DISTANCE: f32 = 5.0;
pub const CAMERA_MAX_DISTANCE: f32 = 60.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 400.0;

// Parallax rig
pub const RIG_MAX_TILT: f32 = std::f32::consts::PI / 20.0;
pub const RIG_BLEND_PER_FRAME: f32 = 0.05;

// Background stars
pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f32 = 100.0;
pub const STAR_DEPTH: f32 = 50.0;

// Clear colour (#050510)
pub const BACKGROUND_RGB: [f32; 3] = [5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0];
