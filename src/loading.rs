//! Global loading indicator state.
//!
//! Counts outstanding operations; the indicator is shown while the count is
//! above zero.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Request header that excludes a request from the loading count.
pub const IGNORE_HEADER: &str = "x-loading-ignore";

/// Counter of outstanding operations.
#[derive(Debug, Default)]
pub struct LoadingState {
    pending: AtomicUsize,
}

impl LoadingState {
    /// Creates an idle counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicUsize::new(0),
        }
    }

    /// Records the start of an operation.
    pub fn start(&self) {
        self.pending.fetch_add(1, Ordering::SeqCst);
    }

    /// Records the end of an operation. Never drops below zero.
    pub fn stop(&self) {
        let _ = self
            .pending
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |count| {
                Some(count.saturating_sub(1))
            });
    }

    /// Returns true while any operation is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending() > 0
    }

    /// Number of outstanding operations.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Starts an operation that stops when the returned guard is dropped.
    pub fn track(&self) -> LoadingGuard<'_> {
        self.start();
        LoadingGuard { state: self }
    }
}

/// Stops its operation on drop.
#[must_use = "the operation stops as soon as the guard is dropped"]
pub struct LoadingGuard<'a> {
    state: &'a LoadingState,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.stop();
    }
}
