//! Camera, orbit controls and the pointer parallax rig.
//!
//! These types avoid platform APIs; the web frontend feeds them pointer
//! input and reads back matrices for rendering and picking.

use crate::animator::Smoothing;
use crate::constants::*;
use glam::{EulerRot, Mat4, Vec2, Vec3, Vec4};

/// Right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point in normalized device coordinates.
    ///
    /// Returns `(origin, direction)`; direction is unit length.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far = far.truncate() / far.w;
        (self.eye, (far - self.eye).normalize_or_zero())
    }
}

/// Orbit around a target with clamped dolly distance.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    azimuth: f32,
    polar: f32,
    distance: f32,
    pub enabled: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitCamera {
    const POLAR_EPS: f32 = 1e-3;

    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset
            .length()
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        let polar = if offset.length_squared() > 0.0 {
            (offset.y / offset.length()).clamp(-1.0, 1.0).acos()
        } else {
            std::f32::consts::FRAC_PI_2
        };
        Self {
            target,
            azimuth: offset.x.atan2(offset.z),
            polar,
            distance,
            enabled: true,
        }
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + Vec3::new(
                s * self.azimuth.sin(),
                self.polar.cos(),
                s * self.azimuth.cos(),
            ) * self.distance
    }

    /// Rotate by pointer drag in radians.
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32) {
        if !self.enabled {
            return;
        }
        self.azimuth -= d_azimuth;
        self.polar = (self.polar - d_polar)
            .clamp(Self::POLAR_EPS, std::f32::consts::PI - Self::POLAR_EPS);
    }

    /// Multiply the distance by `factor` (< 1 moves closer).
    pub fn dolly(&mut self, factor: f32) {
        if !self.enabled || !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

/// Gentle group tilt toward the pointer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParallaxRig {
    /// Rotation about X (pitch) and Y (yaw), radians.
    pub rotation: Vec2,
}

impl ParallaxRig {
    /// `pointer` is in normalized coordinates, both axes in [-1, 1], +y up.
    pub fn update(&mut self, pointer: Vec2, delta_sec: f32, smoothing: Smoothing) {
        let target = Vec2::new(pointer.y * RIG_MAX_TILT, pointer.x * RIG_MAX_TILT);
        let k = smoothing.blend(RIG_BLEND_PER_FRAME, delta_sec);
        self.rotation += (target - self.rotation) * k;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }
}
