//! Animated counter.

use super::animation::{FrameId, FrameScheduler};

/// Counts from 0 to a target over a fixed duration, one frame at a time.
#[derive(Debug, Clone)]
pub struct AnimatedCounter {
    target: u64,
    duration_ms: f64,
    displayed: u64,
    started_at: Option<f64>,
    pending: Option<FrameId>,
}

impl AnimatedCounter {
    pub fn new(target: u64, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            displayed: 0,
            started_at: None,
            pending: None,
        }
    }

    /// Start (or restart) the animation from 0.
    pub fn start(&mut self, frames: &mut FrameScheduler) {
        self.teardown(frames);
        self.displayed = 0;
        self.started_at = None;
        self.pending = Some(frames.request());
    }

    /// Advance the animation for frame `id` at time `now_ms`.
    ///
    /// Returns false when `id` is not this counter's pending frame.
    pub fn on_frame(&mut self, id: FrameId, now_ms: f64, frames: &mut FrameScheduler) -> bool {
        if self.pending != Some(id) {
            return false;
        }
        self.pending = None;

        let started_at = *self.started_at.get_or_insert(now_ms);
        let progress = self.progress_at(now_ms - started_at);
        self.displayed = (progress * self.target as f64).floor() as u64;

        if progress < 1.0 {
            self.pending = Some(frames.request());
        }
        true
    }

    /// Set the display back to 0. A running animation keeps running.
    pub fn reset(&mut self) {
        self.displayed = 0;
    }

    /// Cancel any pending frame.
    pub fn teardown(&mut self, frames: &mut FrameScheduler) {
        if let Some(id) = self.pending.take() {
            frames.cancel(id);
        }
    }

    pub fn displayed(&self) -> u64 {
        self.displayed
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    fn progress_at(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}
