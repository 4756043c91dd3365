//! Per-card animation: idle float, audio-driven ring height and hover scale.

use crate::audio::AmplitudeBuffer;
use crate::constants::*;
use crate::layout::LayoutMode;
use glam::Vec3;

/// How per-frame blend constants are applied when the frame rate varies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Smoothing {
    /// Apply the constant once per frame, whatever the frame time.
    PerFrame,
    /// Convert to an exponential decay that matches the constant at 60 Hz.
    #[default]
    TimeNormalized,
}

impl Smoothing {
    /// Blend factor for this frame given a factor tuned per 60 Hz frame.
    #[inline]
    pub fn blend(self, per_frame: f32, delta_sec: f32) -> f32 {
        match self {
            Smoothing::PerFrame => per_frame,
            Smoothing::TimeNormalized => {
                let frames = (delta_sec * REFERENCE_FPS).max(0.0);
                1.0 - (1.0 - per_frame).powf(frames)
            }
        }
    }

    /// Lerp factor for a rate given per second. Per-frame mode keeps the raw
    /// `delta * rate` clamped to 1; time-normalised mode never reaches 1.
    #[inline]
    pub fn rate(self, per_sec: f32, delta_sec: f32) -> f32 {
        match self {
            Smoothing::PerFrame => (per_sec * delta_sec).clamp(0.0, 1.0),
            Smoothing::TimeNormalized => self.blend(per_sec / REFERENCE_FPS, delta_sec),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

/// Everything a card needs from the current frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput<'a> {
    pub elapsed_sec: f32,
    pub delta_sec: f32,
    pub mode: LayoutMode,
    pub amplitudes: &'a AmplitudeBuffer,
    pub smoothing: Smoothing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Clone, Debug)]
pub struct CardAnimator {
    index: usize,
    base: Vec3,
    hover: HoverState,
    offset_y: f32,
    scale: f32,
}

impl CardAnimator {
    pub fn new(index: usize, base: Vec3) -> Self {
        Self {
            index,
            base,
            hover: HoverState::Idle,
            offset_y: 0.0,
            scale: BASE_SCALE,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn base(&self) -> Vec3 {
        self.base
    }

    /// Move the card to a freshly generated layout point; hover and the
    /// smoothed values carry over so the transition stays continuous.
    pub fn set_base(&mut self, base: Vec3) {
        self.base = base;
    }

    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    pub fn is_hovered(&self) -> bool {
        self.hover == HoverState::Hovered
    }

    pub fn pointer_enter(&mut self) {
        self.hover = HoverState::Hovered;
    }

    pub fn pointer_leave(&mut self) {
        self.hover = HoverState::Idle;
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn target_scale(&self, amplitude01: f32) -> f32 {
        let base = match self.hover {
            HoverState::Hovered => HOVER_SCALE,
            HoverState::Idle => BASE_SCALE,
        };
        base + amplitude01 * WAVE_SCALE_BOOST
    }

    pub fn update(&mut self, frame: &FrameInput<'_>) {
        let amplitude01 = if frame.mode.is_audio_reactive() {
            frame.amplitudes.for_index(self.index) as f32 / 255.0
        } else {
            0.0
        };

        if frame.mode.is_audio_reactive() {
            let target = amplitude01 * WAVE_HEIGHT;
            let k = frame.smoothing.blend(WAVE_BLEND_PER_FRAME, frame.delta_sec);
            self.offset_y += (target - self.offset_y) * k;
        } else {
            self.offset_y = (frame.elapsed_sec + self.base.x).sin() * IDLE_FLOAT_AMPLITUDE;
        }

        let k = frame.smoothing.rate(SCALE_RATE, frame.delta_sec);
        self.scale += (self.target_scale(amplitude01) - self.scale) * k;
    }

    pub fn transform(&self) -> CardTransform {
        CardTransform {
            position: self.base + Vec3::Y * self.offset_y,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_normalized_matches_per_frame_at_reference_rate() {
        let k = Smoothing::TimeNormalized.blend(0.1, 1.0 / REFERENCE_FPS);
        assert!((k - 0.1).abs() < 1e-5);
        assert_eq!(Smoothing::PerFrame.blend(0.1, 0.5), 0.1);
    }

    #[test]
    fn rate_agrees_across_modes_at_reference_rate() {
        let dt = 1.0 / REFERENCE_FPS;
        let per_frame = Smoothing::PerFrame.rate(SCALE_RATE, dt);
        let normalized = Smoothing::TimeNormalized.rate(SCALE_RATE, dt);
        assert!((per_frame - normalized).abs() < 1e-5);
        assert_eq!(Smoothing::PerFrame.rate(SCALE_RATE, 1.0), 1.0);
        assert!(Smoothing::TimeNormalized.rate(SCALE_RATE, 0.25) < 1.0);
    }

    #[test]
    fn zero_delta_does_not_move_scale() {
        let amps = AmplitudeBuffer::new();
        let mut card = CardAnimator::new(0, Vec3::ZERO);
        card.pointer_enter();
        card.update(&FrameInput {
            elapsed_sec: 0.0,
            delta_sec: 0.0,
            mode: LayoutMode::Sphere,
            amplitudes: &amps,
            smoothing: Smoothing::default(),
        });
        assert_eq!(card.scale(), BASE_SCALE);
    }
}
