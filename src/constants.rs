// Interaction and rendering tuning for the web frontend.

// Orbit drag: radians of rotation per CSS pixel of pointer travel
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
// Pointer travel (CSS px) after which a press counts as a drag, not a click
pub const DRAG_THRESHOLD_PX: f32 = 4.0;
// Wheel dolly: distance multiplier is exp(delta_y * this)
pub const WHEEL_DOLLY_PER_UNIT: f32 = 0.001;

// Picking sphere radius as a fraction of the card height (scaled per card)
pub const PICK_RADIUS_FACTOR: f32 = 0.5;

// Star billboards
pub const STAR_SIZE: f32 = 0.35;

// Card tint while the atlas is still loading
pub const PLACEHOLDER_TINT: [f32; 4] = [0.35, 0.38, 0.5, 0.6];

// Photo atlas
pub const ATLAS_MAX_SIZE: u32 = 4096;
pub const ATLAS_CELL_WIDTH: u32 = 256;

// Post-processing
pub const BLOOM_STRENGTH: f32 = 0.35;
pub const BLOOM_THRESHOLD: f32 = 0.85;
// How many low bins feed the ambient bloom boost
pub const AMBIENT_BINS: usize = 16;

// Master output level once music starts
pub const MASTER_GAIN: f32 = 0.8;
