// Host-side tests for per-card animation.

use galaxy_core::{
    AmplitudeBuffer, CardAnimator, FrameInput, HoverState, LayoutMode, Smoothing, HOVER_SCALE,
};
use glam::Vec3;

fn step(
    card: &mut CardAnimator,
    mode: LayoutMode,
    amps: &AmplitudeBuffer,
    elapsed: f32,
    delta: f32,
    smoothing: Smoothing,
) {
    card.update(&FrameInput {
        elapsed_sec: elapsed,
        delta_sec: delta,
        mode,
        amplitudes: amps,
        smoothing,
    });
}

fn full_amplitude() -> AmplitudeBuffer {
    let mut amps = AmplitudeBuffer::new();
    amps.as_mut_slice().fill(255);
    amps
}

#[test]
fn idle_float_follows_absolute_sine() {
    let amps = AmplitudeBuffer::new();
    let base = Vec3::new(0.7, 2.0, -1.0);
    let mut card = CardAnimator::new(3, base);
    for elapsed in [0.0f32, 0.5, 1.25, 10.0] {
        step(&mut card, LayoutMode::Sphere, &amps, elapsed, 1.0 / 60.0, Smoothing::default());
        let expected = (elapsed + base.x).sin() * 0.1;
        assert!((card.offset_y() - expected).abs() < 1e-6);
    }
    let t = card.transform();
    assert_eq!(t.position, base + Vec3::Y * card.offset_y());
}

#[test]
fn wave_offset_blends_toward_amplitude_height() {
    let amps = full_amplitude();
    let mut card = CardAnimator::new(0, Vec3::new(14.4, 0.0, 0.0));
    step(&mut card, LayoutMode::Wave, &amps, 0.0, 1.0 / 60.0, Smoothing::PerFrame);
    // 10% of the way to 15
    assert!((card.offset_y() - 1.5).abs() < 1e-5);
    for _ in 0..200 {
        step(&mut card, LayoutMode::Wave, &amps, 0.0, 1.0 / 60.0, Smoothing::PerFrame);
    }
    assert!((card.offset_y() - 15.0).abs() < 1e-3);
}

#[test]
fn wave_reads_its_own_bin() {
    let mut amps = AmplitudeBuffer::new();
    amps.as_mut_slice()[2] = 255;
    let mut quiet = CardAnimator::new(1, Vec3::ZERO);
    let mut loud = CardAnimator::new(2 + amps.len(), Vec3::ZERO);
    step(&mut quiet, LayoutMode::Wave, &amps, 0.0, 1.0 / 60.0, Smoothing::PerFrame);
    step(&mut loud, LayoutMode::Wave, &amps, 0.0, 1.0 / 60.0, Smoothing::PerFrame);
    assert_eq!(quiet.offset_y(), 0.0);
    assert!(loud.offset_y() > 1.0);
}

#[test]
fn time_normalized_blend_is_frame_rate_independent() {
    let amps = full_amplitude();
    let mut fast = CardAnimator::new(0, Vec3::ZERO);
    let mut slow = CardAnimator::new(0, Vec3::ZERO);
    for _ in 0..4 {
        step(&mut fast, LayoutMode::Wave, &amps, 0.0, 1.0 / 120.0, Smoothing::TimeNormalized);
    }
    for _ in 0..2 {
        step(&mut slow, LayoutMode::Wave, &amps, 0.0, 1.0 / 60.0, Smoothing::TimeNormalized);
    }
    assert!((fast.offset_y() - slow.offset_y()).abs() < 1e-3);
}

#[test]
fn per_frame_hover_scale_lerps_with_clamped_factor() {
    let amps = AmplitudeBuffer::new();
    let mut card = CardAnimator::new(0, Vec3::ZERO);
    card.pointer_enter();
    assert_eq!(card.hover_state(), HoverState::Hovered);
    // k = 0.05 * 10 = 0.5
    step(&mut card, LayoutMode::Helix, &amps, 0.0, 0.05, Smoothing::PerFrame);
    assert!((card.scale() - 1.25).abs() < 1e-5);
    // k clamps to 1: jumps straight to the target
    step(&mut card, LayoutMode::Helix, &amps, 0.0, 1.0, Smoothing::PerFrame);
    assert!((card.scale() - HOVER_SCALE).abs() < 1e-6);

    card.pointer_leave();
    assert!(!card.is_hovered());
    step(&mut card, LayoutMode::Helix, &amps, 0.0, 1.0, Smoothing::PerFrame);
    assert!((card.scale() - 1.0).abs() < 1e-6);
}

#[test]
fn time_normalized_hover_never_snaps_on_a_long_frame() {
    let amps = AmplitudeBuffer::new();
    let mut card = CardAnimator::new(0, Vec3::ZERO);
    card.pointer_enter();
    // the frame loop caps a stalled frame at 0.25 s
    step(&mut card, LayoutMode::Sphere, &amps, 0.0, 0.25, Smoothing::TimeNormalized);
    assert!(card.scale() > 1.0 && card.scale() < HOVER_SCALE, "{}", card.scale());

    let mut smooth = CardAnimator::new(0, Vec3::ZERO);
    smooth.pointer_enter();
    step(&mut smooth, LayoutMode::Sphere, &amps, 0.0, 1.0 / 60.0, Smoothing::TimeNormalized);
    // one reference frame moves a sixth of the way
    assert!((smooth.scale() - (1.0 + 0.5 / 6.0)).abs() < 1e-4);

    card.pointer_leave();
    let before = card.scale();
    step(&mut card, LayoutMode::Sphere, &amps, 0.0, 0.25, Smoothing::TimeNormalized);
    assert!(card.scale() > 1.0 && card.scale() < before);
}

#[test]
fn amplitude_boosts_scale_only_in_wave_mode() {
    let amps = full_amplitude();
    let mut wave = CardAnimator::new(0, Vec3::ZERO);
    let mut sphere = CardAnimator::new(0, Vec3::ZERO);
    step(&mut wave, LayoutMode::Wave, &amps, 0.0, 1.0, Smoothing::PerFrame);
    step(&mut sphere, LayoutMode::Sphere, &amps, 0.0, 1.0, Smoothing::PerFrame);
    assert!((wave.scale() - 1.5).abs() < 1e-6);
    assert!((sphere.scale() - 1.0).abs() < 1e-6);

    wave.pointer_enter();
    assert!((wave.target_scale(1.0) - 2.0).abs() < 1e-6);
}

#[test]
fn set_base_keeps_animation_state() {
    let amps = AmplitudeBuffer::new();
    let mut card = CardAnimator::new(5, Vec3::ZERO);
    card.pointer_enter();
    step(&mut card, LayoutMode::Sphere, &amps, 0.0, 0.05, Smoothing::default());
    let scale = card.scale();
    card.set_base(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(card.base(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(card.scale(), scale);
    assert!(card.is_hovered());
    assert_eq!(card.index(), 5);
}
