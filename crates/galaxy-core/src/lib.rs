pub mod animator;
pub mod audio;
pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod galaxy;
pub mod gallery;
pub mod layout;
pub mod stars;

pub use animator::{CardAnimator, CardTransform, FrameInput, HoverState, Smoothing};
pub use audio::{AmplitudeBuffer, AudioLifecycle, AudioSampler, AudioState, FrequencySource};
pub use camera::{Camera, OrbitCamera, ParallaxRig};
pub use config::GalaxyConfig;
pub use constants::*;
pub use error::{GalaxyError, Result};
pub use galaxy::Galaxy;
pub use gallery::Gallery;
pub use layout::{generate, generate_with_rng, LayoutMode};

// Shaders bundled as string constants
pub static CARDS_WGSL: &str = include_str!("../shaders/cards.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
