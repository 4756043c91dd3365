// Host-side tests for the camera, parallax rig and star field.

use galaxy_core::stars::{star_brightness, star_field};
use galaxy_core::{
    OrbitCamera, ParallaxRig, Smoothing, CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_START,
    RIG_MAX_TILT,
};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn orbit_camera_starts_at_the_configured_eye() {
    let orbit = OrbitCamera::default();
    assert!(orbit.eye().distance(CAMERA_START) < 1e-3);
    assert!((orbit.distance() - 25.0).abs() < 1e-4);
}

#[test]
fn centre_ray_points_at_the_target() {
    let cam = OrbitCamera::default().camera(16.0 / 9.0);
    let (origin, dir) = cam.ray_from_ndc(Vec2::ZERO);
    assert!(origin.distance(CAMERA_START) < 1e-3);
    assert!(dir.distance(Vec3::new(0.0, 0.0, -1.0)) < 1e-3);
}

#[test]
fn dolly_is_clamped() {
    let mut orbit = OrbitCamera::default();
    orbit.dolly(0.01);
    assert_eq!(orbit.distance(), CAMERA_MIN_DISTANCE);
    orbit.dolly(1000.0);
    assert_eq!(orbit.distance(), CAMERA_MAX_DISTANCE);
    orbit.dolly(-1.0);
    assert_eq!(orbit.distance(), CAMERA_MAX_DISTANCE);
}

#[test]
fn disabled_orbit_ignores_input() {
    let mut orbit = OrbitCamera::default();
    orbit.enabled = false;
    let eye = orbit.eye();
    orbit.orbit(1.0, 0.5);
    orbit.dolly(0.5);
    assert_eq!(orbit.eye(), eye);
}

#[test]
fn orbit_keeps_distance_and_never_flips_over_the_pole() {
    let mut orbit = OrbitCamera::default();
    orbit.orbit(0.8, 10.0);
    assert!((orbit.eye().length() - 25.0).abs() < 1e-3);
    assert!(orbit.eye().y > 24.9);
    orbit.orbit(0.0, -20.0);
    assert!(orbit.eye().y < -24.9);
}

#[test]
fn rig_eases_toward_pointer_tilt() {
    let mut rig = ParallaxRig::default();
    assert_eq!(rig.matrix(), glam::Mat4::IDENTITY);
    rig.update(Vec2::new(1.0, -1.0), 1.0 / 60.0, Smoothing::PerFrame);
    assert!((rig.rotation.x - (-RIG_MAX_TILT * 0.05)).abs() < 1e-6);
    assert!((rig.rotation.y - RIG_MAX_TILT * 0.05).abs() < 1e-6);
    for _ in 0..500 {
        rig.update(Vec2::new(1.0, -1.0), 1.0 / 60.0, Smoothing::TimeNormalized);
    }
    assert!((rig.rotation - Vec2::new(-RIG_MAX_TILT, RIG_MAX_TILT)).length() < 1e-4);
}

#[test]
fn star_field_fills_the_outer_shell() {
    let mut rng = StdRng::seed_from_u64(3);
    let stars = star_field(1000, 100.0, 50.0, &mut rng);
    assert_eq!(stars.len(), 1000);
    for s in &stars {
        let d = s.length();
        assert!((100.0 - 1e-2..150.0 + 1e-2).contains(&d), "distance {d}");
    }
    let brightness = star_brightness(1000, &mut rng);
    assert!(brightness.iter().all(|b| (0.3..1.0).contains(b)));
}
