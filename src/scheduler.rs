//! Per-frame scheduling handles.
//!
//! The effect never relies on an ambient animation loop. It holds a
//! [`FrameScheduler`], asks it for one frame at a time, and cancels the
//! outstanding request when it stops or is torn down.
//!
//! - [`ManualScheduler`] - headless; frames fire when the caller says so
//! - The preview binary implements the trait on top of `winit` redraw requests

use std::collections::BTreeSet;

/// Token for one pending frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameRequest(u64);

impl FrameRequest {
    /// Wrap a raw request id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw request id.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Source of per-frame callbacks, typically tied to display refresh.
pub trait FrameScheduler {
    /// Ask for a callback on the next frame.
    fn request_frame(&mut self) -> FrameRequest;

    /// Withdraw a pending request. Unknown or already-fired requests are ignored.
    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Scheduler driven by hand, for tests and headless stepping.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: BTreeSet<FrameRequest>,
    requested: u64,
    cancelled: u64,
}

impl ManualScheduler {
    /// Create an idle scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting to fire.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Whether `request` is still waiting to fire.
    pub fn is_pending(&self, request: FrameRequest) -> bool {
        self.pending.contains(&request)
    }

    /// Total requests ever made.
    pub fn requested_count(&self) -> u64 {
        self.requested
    }

    /// Total requests withdrawn while pending.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }

    /// Fire the frame: remove and return every pending request, oldest first.
    pub fn take_due(&mut self) -> Vec<FrameRequest> {
        std::mem::take(&mut self.pending).into_iter().collect()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.requested += 1;
        self.pending.insert(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending.remove(&request) {
            self.cancelled += 1;
        }
    }
}
