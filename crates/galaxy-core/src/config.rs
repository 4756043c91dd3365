use crate::animator::Smoothing;
use crate::constants::*;
use crate::error::{GalaxyError, Result};
use crate::layout::LayoutMode;

/// Start-up settings; the web frontend overrides them from the page query.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyConfig {
    pub layout: LayoutMode,
    pub count: usize,
    pub radius: f32,
    pub smoothing: Smoothing,
    pub audio_url: String,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            layout: LayoutMode::Sphere,
            count: DEFAULT_COUNT,
            radius: DEFAULT_RADIUS,
            smoothing: Smoothing::TimeNormalized,
            audio_url: DEFAULT_AUDIO_URL.to_string(),
        }
    }
}

impl GalaxyConfig {
    pub const KEYS: [&'static str; 5] = ["layout", "count", "radius", "smoothing", "audio"];

    /// Snap to the slider step and clamp into the slider range.
    pub fn clamp_count(count: usize) -> usize {
        let rounded = count.min(COUNT_MAX).saturating_add(COUNT_STEP / 2);
        let snapped = rounded / COUNT_STEP * COUNT_STEP;
        let clamped = snapped.clamp(COUNT_MIN, COUNT_MAX);
        if clamped != count {
            log::debug!("[config] count {} -> {}", count, clamped);
        }
        clamped
    }

    pub fn apply_param(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || GalaxyError::invalid_param(key, value);
        match key {
            "layout" => self.layout = value.parse().map_err(|_| invalid())?,
            "count" => {
                let n: usize = value.trim().parse().map_err(|_| invalid())?;
                self.count = Self::clamp_count(n);
            }
            "radius" => {
                let r: f32 = value.trim().parse().map_err(|_| invalid())?;
                if !(r.is_finite() && r > 0.0) {
                    return Err(invalid());
                }
                self.radius = r;
            }
            "smoothing" => {
                self.smoothing = match value.trim() {
                    "frame" => Smoothing::PerFrame,
                    "time" => Smoothing::TimeNormalized,
                    _ => return Err(invalid()),
                }
            }
            "audio" => {
                if value.trim().is_empty() {
                    return Err(invalid());
                }
                self.audio_url = value.trim().to_string();
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }

    /// Apply every pair, logging and skipping the ones that do not parse.
    pub fn apply_params<'a, I>(&mut self, params: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (k, v) in params {
            if let Err(e) = self.apply_param(k, v) {
                log::warn!("[config] {}", e);
            }
        }
    }
}
