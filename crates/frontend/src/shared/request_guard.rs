//! Latest-request-wins bookkeeping for pages that reload whenever a filter changes.
//!
//! The counter lives in an `Arc` rather than a reactive `StoredValue`, so an
//! async task can still consult it after the page that started it has been
//! disposed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
}

/// Handed to one in-flight request; stale once a newer request starts or the
/// guard is invalidated.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }

    /// Drops every outstanding ticket without starting a new request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

impl RequestTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_makes_older_ticket_stale() {
        let guard = RequestGuard::new();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cleared_filter_drops_in_flight_response() {
        let guard = RequestGuard::new();
        let pending = guard.begin();
        guard.invalidate();
        assert!(!pending.is_current());

        let next = guard.begin();
        assert!(next.is_current());
    }

    #[test]
    fn test_ticket_outlives_the_page() {
        let guard = RequestGuard::new();
        let pending = guard.begin();
        let on_unmount = guard.clone();
        drop(guard);

        assert!(pending.is_current());
        on_unmount.invalidate();
        assert!(!pending.is_current());
    }
}
