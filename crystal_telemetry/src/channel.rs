//! Bounded sampler-to-renderer hand-off with a drop-oldest overflow policy.
//!
//! Both ends are non-blocking: the producer overwrites the oldest queued
//! sample when full, the consumer polls. FIFO order holds among retained
//! samples, so the renderer never sees anything older than the
//! second-most-recent publish.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::sample::Sample;

/// Default queue depth.
pub const CHANNEL_DEPTH: usize = 2;

#[derive(Clone)]
pub struct SampleChannel {
    inner: Arc<Mutex<VecDeque<Sample>>>,
    capacity: usize,
}

impl SampleChannel {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "channel capacity must be positive");
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    /// Never blocks and never fails: on overflow the oldest queued sample is
    /// silently discarded to make room.
    pub fn publish(&self, sample: Sample) {
        let mut queue = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(sample);
    }

    /// Non-blocking: removes and returns the oldest retained sample, or
    /// `None` when the queue is empty.
    pub fn try_take(&self) -> Option<Sample> {
        self.inner
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
    }
}

impl Default for SampleChannel {
    fn default() -> Self {
        Self::new(CHANNEL_DEPTH)
    }
}
