//! Fetch generations.
//!
//! Every fetch batch is tagged with the generation that was current when it
//! started. Changing the selection or timeframe bumps the counter, so a batch
//! that completes afterwards can be recognised as stale and dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Tag carried by a fetch batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchToken {
    generation: u64,
}

impl FetchToken {
    /// Generation this token was issued for.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Shared, monotonically increasing generation counter.
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    current: Arc<AtomicU64>,
}

impl GenerationCounter {
    /// Creates a counter at generation zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new generation and returns its token.
    ///
    /// Any token issued earlier stops being current.
    pub fn issue(&self) -> FetchToken {
        let generation = self.current.fetch_add(1, Ordering::AcqRel) + 1;
        FetchToken { generation }
    }

    /// Invalidates every outstanding token without issuing a new one.
    ///
    /// Returns the new generation.
    pub fn supersede(&self) -> u64 {
        self.current.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Current generation.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.current.load(Ordering::Acquire)
    }

    /// Returns `true` if no newer generation has started since `token` was issued.
    #[must_use]
    pub fn is_current(&self, token: FetchToken) -> bool {
        self.current() == token.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_invalidates_previous() {
        let counter = GenerationCounter::new();
        let first = counter.issue();
        assert!(counter.is_current(first));

        let second = counter.issue();
        assert!(!counter.is_current(first));
        assert!(counter.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_supersede() {
        let counter = GenerationCounter::new();
        let token = counter.issue();
        assert_eq!(counter.supersede(), 2);
        assert!(!counter.is_current(token));
        assert_eq!(counter.current(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let counter = GenerationCounter::new();
        let shared = counter.clone();
        let token = counter.issue();
        shared.supersede();
        assert!(!counter.is_current(token));
    }
}
