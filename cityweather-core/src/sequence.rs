//! Last-issued-wins ordering for overlapping requests.
//!
//! Every request that goes out takes a [`Ticket`]. When its response comes
//! back it only counts if no newer ticket was handed out in the meantime;
//! otherwise the caller gets [`Fetched::Superseded`] and must drop it.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RequestSequence {
    last_issued: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Result of a request that may have been overtaken by a newer one.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Current(T),
    Superseded,
}

impl<T> Fetched<T> {
    pub fn current(self) -> Option<T> {
        match self {
            Fetched::Current(value) => Some(value),
            Fetched::Superseded => None,
        }
    }

    pub fn is_superseded(&self) -> bool {
        matches!(self, Fetched::Superseded)
    }
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.last_issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.last_issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Wrap `value` according to whether `ticket` is still the latest one.
    pub fn settle<T>(&self, ticket: Ticket, value: T) -> Fetched<T> {
        if self.is_latest(ticket) {
            Fetched::Current(value)
        } else {
            Fetched::Superseded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_monotonic() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(second > first);
    }

    #[test]
    fn only_latest_ticket_settles_as_current() {
        let seq = RequestSequence::new();
        let older = seq.issue();
        let newer = seq.issue();

        assert!(seq.settle(older, "old").is_superseded());
        assert_eq!(seq.settle(newer, "new"), Fetched::Current("new"));
    }
}
