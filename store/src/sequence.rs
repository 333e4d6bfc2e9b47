//! Monotonic request sequencing for the catalog fetch.
//!
//! Filter changes fire one fetch each, with no ordering between overlapping
//! responses. [`RequestSequence`] closes that race: each fetch takes a
//! ticket, and a response is applied only while its ticket is still the
//! newest, so a slow early response can never overwrite a faster later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared monotonic counter handing out fetch tickets.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    counter: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding every ticket issued before.
    pub fn begin(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a ticket is still the newest one issued.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_wins() {
        let seq = RequestSequence::new();

        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first), "superseded response must be dropped");
        assert!(seq.is_current(second));
    }

    #[test]
    fn clones_share_the_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();

        let ticket = seq.begin();
        assert!(other.is_current(ticket));
        other.begin();
        assert!(!seq.is_current(ticket));
    }
}
