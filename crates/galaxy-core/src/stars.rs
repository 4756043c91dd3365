use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Background star positions in the shell `[radius, radius + depth)`,
/// area-uniform in direction.
pub fn star_field<R: Rng + ?Sized>(
    count: usize,
    radius: f32,
    depth: f32,
    rng: &mut R,
) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let r = radius + depth * rng.gen::<f32>();
            let cos_polar = 1.0 - 2.0 * rng.gen::<f32>();
            let sin_polar = (1.0 - cos_polar * cos_polar).max(0.0).sqrt();
            let az = rng.gen_range(0.0..TAU);
            Vec3::new(sin_polar * az.sin(), cos_polar, sin_polar * az.cos()) * r
        })
        .collect()
}

/// Per-star brightness in 0.3..1.0, cheap twinkle variation.
pub fn star_brightness<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f32> {
    (0..count).map(|_| rng.gen_range(0.3..1.0)).collect()
}
