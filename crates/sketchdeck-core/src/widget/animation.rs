//! Cancellable per-frame callbacks.
//!
//! Widgets that animate request a frame, get a [`FrameId`] back and are
//! handed that id on the next frame. Whoever holds a pending id must cancel
//! it on teardown so no callback outlives its widget.

use std::collections::BTreeSet;

/// Handle for one requested frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameId(u64);

/// Queue of pending frame callbacks.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    next_id: u64,
    pending: BTreeSet<FrameId>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a callback on the next frame.
    pub fn request(&mut self) -> FrameId {
        let id = FrameId(self.next_id);
        self.next_id += 1;
        self.pending.insert(id);
        id
    }

    /// Cancel a pending callback. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, id: FrameId) -> bool {
        self.pending.remove(&id)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drain the callbacks due this frame, in request order.
    ///
    /// Requests made while dispatching them land in the next frame.
    pub fn take_due(&mut self) -> Vec<FrameId> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_and_take() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        let b = frames.request();
        assert_ne!(a, b);
        assert_eq!(frames.take_due(), vec![a, b]);
        assert!(!frames.has_pending());
    }

    #[test]
    fn test_cancel() {
        let mut frames = FrameScheduler::new();
        let a = frames.request();
        assert!(frames.cancel(a));
        assert!(!frames.cancel(a));
        assert!(frames.take_due().is_empty());
    }

    #[test]
    fn test_requests_during_dispatch_go_to_next_frame() {
        let mut frames = FrameScheduler::new();
        frames.request();
        let due = frames.take_due();
        let next = frames.request();
        assert_eq!(due.len(), 1);
        assert_eq!(frames.take_due(), vec![next]);
    }
}
