//! Per-frame amplitude sampling and the one-shot audio start lifecycle.
//!
//! The sampler is the single writer of an [`AmplitudeBuffer`]; every card
//! reads the same buffer later in the same frame, so plain borrows suffice.

use crate::constants::AMPLITUDE_BINS;
use crate::error::{GalaxyError, Result};

/// Anything that can report byte frequency magnitudes (0..=255 per bin).
pub trait FrequencySource {
    fn fill_byte_frequency_data(&self, out: &mut [u8]);
}

/// Fixed-length snapshot of frequency-domain magnitudes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmplitudeBuffer {
    bins: [u8; AMPLITUDE_BINS],
}

impl Default for AmplitudeBuffer {
    fn default() -> Self {
        Self {
            bins: [0; AMPLITUDE_BINS],
        }
    }
}

impl AmplitudeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bins
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sample driving card `index`: bins are assigned round-robin.
    #[inline]
    pub fn for_index(&self, index: usize) -> u8 {
        self.bins[index % self.bins.len()]
    }

    /// Mean level over the first `n` bins, normalised to 0..=1.
    pub fn level(&self, n: usize) -> f32 {
        let n = n.clamp(1, self.bins.len());
        let sum: u32 = self.bins[..n].iter().map(|&b| b as u32).sum();
        sum as f32 / (n as f32 * 255.0)
    }

    pub fn clear(&mut self) {
        self.bins.fill(0);
    }
}

/// Holds the analyser once audio has started; before that every sample is a no-op.
#[derive(Debug)]
pub struct AudioSampler<S> {
    source: Option<S>,
}

impl<S> Default for AudioSampler<S> {
    fn default() -> Self {
        Self { source: None }
    }
}

impl<S: FrequencySource> AudioSampler<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, source: S) {
        self.source = Some(source);
    }

    pub fn detach(&mut self) -> Option<S> {
        self.source.take()
    }

    pub fn is_active(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Overwrite `buffer` with the current magnitudes. Returns whether a
    /// sample was taken.
    pub fn sample(&self, buffer: &mut AmplitudeBuffer) -> bool {
        match &self.source {
            Some(src) => {
                src.fill_byte_frequency_data(buffer.as_mut_slice());
                true
            }
            None => false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioState {
    #[default]
    NotStarted,
    Starting,
    Started,
}

/// not-started -> starting -> started, with failure returning to not-started.
#[derive(Clone, Debug, Default)]
pub struct AudioLifecycle {
    state: AudioState,
    last_error: Option<GalaxyError>,
}

impl AudioLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> AudioState {
        self.state
    }

    pub fn is_started(&self) -> bool {
        self.state == AudioState::Started
    }

    pub fn last_error(&self) -> Option<&GalaxyError> {
        self.last_error.as_ref()
    }

    /// Called on the user's begin gesture.
    pub fn begin(&mut self) -> Result<()> {
        match self.state {
            AudioState::NotStarted => {
                self.state = AudioState::Starting;
                self.last_error = None;
                Ok(())
            }
            AudioState::Starting => Err(GalaxyError::AudioBusy),
            AudioState::Started => Err(GalaxyError::AudioAlreadyStarted),
        }
    }

    pub fn succeed(&mut self) {
        if self.state == AudioState::Starting {
            self.state = AudioState::Started;
        }
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> &GalaxyError {
        let err = GalaxyError::AudioStart(reason.into());
        log::warn!("[audio] {}", err);
        self.state = AudioState::NotStarted;
        self.last_error.insert(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp;

    impl FrequencySource for Ramp {
        fn fill_byte_frequency_data(&self, out: &mut [u8]) {
            for (i, b) in out.iter_mut().enumerate() {
                *b = i as u8;
            }
        }
    }

    #[test]
    fn inactive_sampler_leaves_buffer_untouched() {
        let sampler: AudioSampler<Ramp> = AudioSampler::new();
        let mut buf = AmplitudeBuffer::new();
        buf.as_mut_slice()[3] = 77;
        assert!(!sampler.sample(&mut buf));
        assert_eq!(buf.as_slice()[3], 77);
    }

    #[test]
    fn attached_sampler_overwrites_in_place() {
        let mut sampler = AudioSampler::new();
        sampler.attach(Ramp);
        let mut buf = AmplitudeBuffer::new();
        assert!(sampler.sample(&mut buf));
        assert_eq!(buf.for_index(5), 5);
        assert_eq!(buf.for_index(AMPLITUDE_BINS + 5), 5);
    }
}
