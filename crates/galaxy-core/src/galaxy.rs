use crate::animator::{CardAnimator, CardTransform, FrameInput, Smoothing};
use crate::audio::AmplitudeBuffer;
use crate::config::GalaxyConfig;
use crate::gallery::Gallery;
use crate::layout::{self, LayoutMode};
use glam::Vec3;
use rand::prelude::*;

/// The card collection: layout mode, item count and one animator per card.
///
/// Card `i` always shows `gallery.url_for(i)`; only its position changes when
/// the layout is recomputed.
pub struct Galaxy {
    mode: LayoutMode,
    count: usize,
    radius: f32,
    smoothing: Smoothing,
    gallery: Gallery,
    cards: Vec<CardAnimator>,
    hovered: Option<usize>,
    elapsed_sec: f32,
    rng: StdRng,
}

impl Galaxy {
    pub fn new(gallery: Gallery, config: &GalaxyConfig, seed: u64) -> Self {
        let mut galaxy = Self {
            mode: config.layout,
            count: config.count,
            radius: config.radius,
            smoothing: config.smoothing,
            gallery,
            cards: Vec::new(),
            hovered: None,
            elapsed_sec: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        galaxy.relayout();
        galaxy
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Configured item count (the number of cards when the gallery has photos).
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn smoothing(&self) -> Smoothing {
        self.smoothing
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn cards(&self) -> &[CardAnimator] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn elapsed_sec(&self) -> f32 {
        self.elapsed_sec
    }

    /// Returns `true` when the mode changed and the layout was recomputed.
    pub fn set_mode(&mut self, mode: LayoutMode) -> bool {
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.relayout();
        true
    }

    pub fn set_count(&mut self, count: usize) -> bool {
        if count == self.count {
            return false;
        }
        self.count = count;
        self.relayout();
        true
    }

    pub fn set_radius(&mut self, radius: f32) {
        if radius != self.radius {
            self.radius = radius;
            self.relayout();
        }
    }

    pub fn set_smoothing(&mut self, smoothing: Smoothing) {
        self.smoothing = smoothing;
    }

    /// Regenerate every base position. Existing cards keep their animation
    /// state; cards past the new count are dropped, new ones start idle.
    pub fn relayout(&mut self) {
        let n = self.gallery.fillable(self.count);
        let points = layout::generate_with_rng(self.mode, n, self.radius, &mut self.rng);
        self.cards.truncate(n);
        for (card, p) in self.cards.iter_mut().zip(points.iter()) {
            card.set_base(*p);
        }
        let existing = self.cards.len();
        self.cards.extend(
            points[existing..]
                .iter()
                .enumerate()
                .map(|(i, p)| CardAnimator::new(existing + i, *p)),
        );
        if self.hovered.is_some_and(|h| h >= n) {
            self.hovered = None;
        }
        log::debug!(
            "[layout] {} x{} radius={:.1}",
            self.mode,
            self.cards.len(),
            self.radius
        );
    }

    pub fn tick(&mut self, delta_sec: f32, amplitudes: &AmplitudeBuffer) {
        self.elapsed_sec += delta_sec;
        let frame = FrameInput {
            elapsed_sec: self.elapsed_sec,
            delta_sec,
            mode: self.mode,
            amplitudes,
            smoothing: self.smoothing,
        };
        for card in &mut self.cards {
            card.update(&frame);
        }
    }

    /// Route pointer hover to the cards. Returns `true` if the hovered card changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.cards.len());
        if index == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered.and_then(|i| self.cards.get_mut(i)) {
            prev.pointer_leave();
        }
        if let Some(next) = index.and_then(|i| self.cards.get_mut(i)) {
            next.pointer_enter();
        }
        self.hovered = index;
        true
    }

    pub fn url_for(&self, index: usize) -> Option<&str> {
        (index < self.cards.len())
            .then(|| self.gallery.url_for(index))
            .flatten()
    }

    /// Asset identifier to hand to the full-view collaborator.
    pub fn click(&self, index: usize) -> Option<&str> {
        let url = self.url_for(index);
        if let Some(u) = url {
            log::info!("[viewer] open card {} -> {}", index, u);
        }
        url
    }

    pub fn positions(&self) -> Vec<Vec3> {
        self.cards.iter().map(CardAnimator::base).collect()
    }

    pub fn transforms(&self) -> impl Iterator<Item = CardTransform> + '_ {
        self.cards.iter().map(CardAnimator::transform)
    }
}
