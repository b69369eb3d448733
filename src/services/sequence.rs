// ABOUTME: Monotonic request tickets for view requests
// ABOUTME: A response may only become the current view if no newer request has started
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies the request a view answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewTicket(u64);

impl ViewTicket {
    /// Sequence number of this ticket
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Issues tickets and answers whether a ticket is still the latest
#[derive(Debug, Default)]
pub struct ViewSequence {
    counter: AtomicU64,
}

impl ViewSequence {
    /// Create a sequence with no requests started
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request and return its ticket
    pub fn begin(&self) -> ViewTicket {
        ViewTicket(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True when no request newer than `ticket` has started
    #[must_use]
    pub fn is_latest(&self, ticket: ViewTicket) -> bool {
        self.counter.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_ticket_is_latest() {
        let sequence = ViewSequence::new();
        let first = sequence.begin();
        assert!(sequence.is_latest(first));

        let second = sequence.begin();
        assert!(second > first);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }
}
