//! Layout generators mapping an item count and radius to 3D positions.
//!
//! Every generator returns exactly `count` points, index-aligned with the
//! item list: point `i` belongs to card `i`. `Sphere`, `Helix`, `Donut` and
//! `Wave` placement is a pure function of the inputs (`Donut` draws its
//! angles from the supplied RNG, so it is deterministic for a seeded RNG);
//! `Random` and `Heart` are stochastic by nature.

use crate::constants::*;
use crate::error::GalaxyError;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    #[default]
    Sphere,
    Helix,
    Random,
    Heart,
    Donut,
    Wave,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 6] = [
        LayoutMode::Sphere,
        LayoutMode::Helix,
        LayoutMode::Random,
        LayoutMode::Heart,
        LayoutMode::Donut,
        LayoutMode::Wave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            LayoutMode::Sphere => "sphere",
            LayoutMode::Helix => "helix",
            LayoutMode::Random => "random",
            LayoutMode::Heart => "heart",
            LayoutMode::Donut => "donut",
            LayoutMode::Wave => "wave",
        }
    }

    /// Lenient lookup used by the UI: unknown names fall back to `Sphere`.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::debug!("[layout] unknown mode {:?}, using sphere", name);
            LayoutMode::Sphere
        })
    }

    /// Whether cards in this mode follow the audio amplitude.
    pub fn is_audio_reactive(self) -> bool {
        matches!(self, LayoutMode::Wave)
    }
}

impl FromStr for LayoutMode {
    type Err = GalaxyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LayoutMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| GalaxyError::UnknownLayout(s.to_string()))
    }
}

impl fmt::Display for LayoutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generate positions for `mode` using the thread-local RNG.
pub fn generate(mode: LayoutMode, count: usize, radius: f32) -> Vec<Vec3> {
    generate_with_rng(mode, count, radius, &mut rand::thread_rng())
}

pub fn generate_with_rng<R: Rng + ?Sized>(
    mode: LayoutMode,
    count: usize,
    radius: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    match mode {
        LayoutMode::Sphere => sphere(count, radius),
        LayoutMode::Helix => helix(count, radius),
        LayoutMode::Random => random_scatter(count, radius, rng),
        LayoutMode::Heart => heart(count, radius, rng),
        LayoutMode::Donut => donut(count, radius, rng),
        LayoutMode::Wave => wave(count, radius),
    }
}

/// Golden-angle (Fibonacci) spiral over the sphere surface.
///
/// `y` steps linearly from +1 to -1; a single item sits on the north pole.
pub fn sphere(count: usize, radius: f32) -> Vec<Vec3> {
    let golden = PI * (3.0 - 5.0_f32.sqrt());
    let denom = count.saturating_sub(1).max(1) as f32;
    (0..count)
        .map(|i| {
            let y = 1.0 - (i as f32 / denom) * 2.0;
            let ring = (1.0 - y * y).max(0.0).sqrt();
            let theta = golden * i as f32;
            Vec3::new(
                theta.cos() * ring * radius,
                y * radius,
                theta.sin() * ring * radius,
            )
        })
        .collect()
}

pub fn helix(count: usize, radius: f32) -> Vec<Vec3> {
    let top = count as f32 * HELIX_CENTER_FACTOR;
    (0..count)
        .map(|i| {
            let theta = i as f32 * HELIX_ANGLE_STEP;
            let y = top - i as f32 * HELIX_RISE_STEP;
            Vec3::new(theta.cos() * radius, y, theta.sin() * radius)
        })
        .collect()
}

/// Random directions pushed into the radial band `[0.5 * radius, radius)`.
pub fn random_scatter<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let dir = loop {
                let v = Vec3::new(
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                    rng.gen_range(-1.0..1.0),
                );
                if let Some(n) = v.try_normalize() {
                    break n;
                }
            };
            let band = RANDOM_MIN_FRACTION + rng.gen::<f32>() * (1.0 - RANDOM_MIN_FRACTION);
            dir * radius * band
        })
        .collect()
}

/// Implicit heart surface; negative inside the volume.
#[inline]
pub fn heart_implicit(x: f32, y: f32, z: f32) -> f32 {
    let (x2, y2, z3) = (x * x, y * y, z * z * z);
    let a = x2 + 9.0 * y2 / 4.0 + z * z - 1.0;
    a * a * a - x2 * z3 - (9.0 / 80.0) * y2 * z3
}

#[inline]
pub fn in_heart(x: f32, y: f32, z: f32) -> bool {
    heart_implicit(x, y, z) < 0.0
}

/// Rejection-sample the heart volume, then remap `(x, y, z) -> (x, z, -y)`
/// so the heart stands upright, scaled by `0.8 * radius`.
pub fn heart<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    let h = HEART_SAMPLE_HALF_WIDTH;
    let scale = HEART_SCALE * radius;
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let x = rng.gen_range(-h..h);
        let y = rng.gen_range(-h..h);
        let z = rng.gen_range(-h..h);
        if in_heart(x, y, z) {
            points.push(Vec3::new(x, z, -y) * scale);
        }
    }
    points
}

/// Torus around the Y axis with angle-uniform sampling. Density is higher
/// near the inner equator; that clustering is part of the look.
pub fn donut<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    let ring = DONUT_RING_FACTOR * radius;
    let tube = DONUT_TUBE_FACTOR * radius;
    (0..count)
        .map(|_| {
            let u = rng.gen_range(0.0..TAU);
            let v = rng.gen_range(0.0..TAU);
            let r = ring + tube * v.cos();
            Vec3::new(r * u.cos(), tube * v.sin(), r * u.sin())
        })
        .collect()
}

/// Flat ring at `y = 0`; height comes from the animator, not from here.
pub fn wave(count: usize, radius: f32) -> Vec<Vec3> {
    let ring = WAVE_RING_FACTOR * radius;
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * TAU;
            Vec3::new(a.cos() * ring, 0.0, a.sin() * ring)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_origin_is_inside() {
        assert!(in_heart(0.0, 0.0, 0.0));
        assert!(!in_heart(1.5, 1.5, 1.5));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Donut".parse::<LayoutMode>(), Ok(LayoutMode::Donut));
        assert_eq!(" wave ".parse::<LayoutMode>(), Ok(LayoutMode::Wave));
    }
}
