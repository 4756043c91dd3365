// Host-side tests for the layout generators.

use galaxy_core::layout::{self, in_heart};
use galaxy_core::{
    generate_with_rng, GalaxyError, LayoutMode, DONUT_RING_FACTOR, DONUT_TUBE_FACTOR,
};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

const R: f32 = 12.0;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn every_mode_returns_exactly_count_points() {
    let mut rng = rng();
    for mode in LayoutMode::ALL {
        for count in [0usize, 1, 2, 7, 400] {
            let pts = generate_with_rng(mode, count, R, &mut rng);
            assert_eq!(pts.len(), count, "{mode} with count {count}");
            assert!(pts.iter().all(|p| p.is_finite()), "{mode} produced NaN");
        }
    }
}

#[test]
fn sphere_points_lie_on_the_surface_pole_to_pole() {
    let pts = layout::sphere(100, R);
    for p in &pts {
        assert!(approx(p.length(), R, 1e-3), "off surface: {p:?}");
    }
    assert!(approx(pts[0].y, R, 1e-4));
    assert!(approx(pts[99].y, -R, 1e-4));
    // y decreases monotonically
    assert!(pts.windows(2).all(|w| w[1].y < w[0].y));
}

#[test]
fn single_sphere_item_sits_on_north_pole() {
    let pts = layout::sphere(1, R);
    assert_eq!(pts.len(), 1);
    assert!(pts[0].distance(Vec3::new(0.0, R, 0.0)) < 1e-4);
}

#[test]
fn helix_keeps_radius_and_descends() {
    let count = 400;
    let pts = layout::helix(count, R);
    for p in &pts {
        assert!(approx(Vec3::new(p.x, 0.0, p.z).length(), R, 1e-3));
    }
    assert!(approx(pts[0].y, count as f32 * 0.05, 1e-4));
    for w in pts.windows(2) {
        assert!(approx(w[0].y - w[1].y, 0.1, 1e-4));
    }
    // column is centred: top at +20, bottom near -19.9
    assert!(approx(pts[count - 1].y, 20.0 - 39.9, 1e-3));
}

#[test]
fn random_scatter_stays_in_radial_band() {
    let pts = layout::random_scatter(2000, R, &mut rng());
    for p in pts {
        let d = p.length();
        assert!((0.5 * R - 1e-3..=R + 1e-3).contains(&d), "distance {d}");
    }
}

#[test]
fn seeded_rng_makes_stochastic_layouts_reproducible() {
    for mode in [LayoutMode::Random, LayoutMode::Heart, LayoutMode::Donut] {
        let a = generate_with_rng(mode, 50, R, &mut rng());
        let b = generate_with_rng(mode, 50, R, &mut rng());
        assert_eq!(a, b, "{mode}");
    }
}

#[test]
fn heart_points_map_back_inside_the_surface() {
    let scale = 0.8 * R;
    let pts = layout::heart(500, R, &mut rng());
    for p in pts {
        // stored as (x, z, -y) * scale
        let (x, y, z) = (p.x / scale, -p.z / scale, p.y / scale);
        assert!(in_heart(x, y, z), "outside heart: {p:?}");
    }
}

#[test]
fn donut_points_lie_on_the_torus() {
    let ring = DONUT_RING_FACTOR * R;
    let tube = DONUT_TUBE_FACTOR * R;
    for p in layout::donut(500, R, &mut rng()) {
        let from_ring = Vec3::new(p.x, 0.0, p.z).length() - ring;
        let d = (from_ring * from_ring + p.y * p.y).sqrt();
        assert!(approx(d, tube, 1e-3), "tube distance {d}");
    }
}

#[test]
fn donut_points_stay_in_the_ring_band() {
    // ring 9.6 and tube 3.6 at radius 12
    let lo = (DONUT_RING_FACTOR - DONUT_TUBE_FACTOR) * R;
    let hi = (DONUT_RING_FACTOR + DONUT_TUBE_FACTOR) * R;
    assert!(approx(lo, 6.0, 1e-5) && approx(hi, 13.2, 1e-5));
    let pts = generate_with_rng(LayoutMode::Donut, 500, R, &mut rng());
    assert_eq!(pts.len(), 500);
    for p in pts {
        let d = Vec3::new(p.x, 0.0, p.z).length();
        assert!(d >= lo - 1e-3 && d <= hi + 1e-3, "xz distance {d}");
    }
}

#[test]
fn wave_is_a_flat_evenly_spaced_ring() {
    let count = 8;
    let pts = layout::wave(count, R);
    for (i, p) in pts.iter().enumerate() {
        assert_eq!(p.y, 0.0);
        assert!(approx(p.length(), 1.2 * R, 1e-3));
        let angle = p.z.atan2(p.x).rem_euclid(std::f32::consts::TAU);
        let expected = i as f32 / count as f32 * std::f32::consts::TAU;
        assert!(approx(angle, expected, 1e-3), "item {i}: {angle} vs {expected}");
    }
}

#[test]
fn unknown_mode_name_falls_back_to_sphere() {
    assert_eq!(LayoutMode::from_name("spiral"), LayoutMode::Sphere);
    assert_eq!(LayoutMode::from_name("HEART"), LayoutMode::Heart);
    assert_eq!(
        "spiral".parse::<LayoutMode>(),
        Err(GalaxyError::UnknownLayout("spiral".into()))
    );
}

#[test]
fn only_wave_is_audio_reactive() {
    for mode in LayoutMode::ALL {
        assert_eq!(mode.is_audio_reactive(), mode == LayoutMode::Wave);
    }
}
