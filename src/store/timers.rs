//! Deferred callbacks keyed by the store clock.
//!
//! The game has exactly two delayed operations: validating a freshly
//! filled board and clearing the progress map's "just completed" flag.
//! Both are queued here and fire when the owner advances the clock past
//! their due time. `cancel` drops a superseded action; `clear` drops
//! everything when the frontend tears down.

use serde::{Deserialize, Serialize};

/// An operation waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Deferred {
    /// Judge the board, if it is still the puzzle generation that scheduled this.
    ValidateAnswer { generation: u64 },
    /// Drop the just-completed flag once the progress map transition is over.
    ClearJustCompleted,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Pending {
    due_ms: u64,
    /// Insertion order breaks ties between equal due times.
    sequence: u64,
    action: Deferred,
}

/// Queue of deferred operations.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DeferredQueue {
    pending: Vec<Pending>,
    next_sequence: u64,
}

impl DeferredQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to fire at `due_ms`.
    pub fn schedule(&mut self, due_ms: u64, action: Deferred) {
        self.pending.push(Pending {
            due_ms,
            sequence: self.next_sequence,
            action,
        });
        self.next_sequence += 1;
    }

    /// Remove and return every action due at or before `now_ms`,
    /// ordered by due time then insertion.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Deferred> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due_ms <= now_ms);
        self.pending = rest;

        due.sort_by_key(|p| (p.due_ms, p.sequence));
        due.into_iter().map(|p| p.action).collect()
    }

    /// Drop pending actions matching `predicate`. Returns how many were dropped.
    pub fn cancel(&mut self, predicate: impl Fn(&Deferred) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| !predicate(&p.action));
        before - self.pending.len()
    }

    /// Earliest due time, if anything is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Drop everything pending.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_due_before_time() {
        let mut queue = DeferredQueue::new();
        queue.schedule(300, Deferred::ValidateAnswer { generation: 1 });

        assert!(queue.take_due(299).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_due(), Some(300));
    }

    #[test]
    fn test_due_exactly_at_time() {
        let mut queue = DeferredQueue::new();
        queue.schedule(300, Deferred::ClearJustCompleted);

        assert_eq!(queue.take_due(300), vec![Deferred::ClearJustCompleted]);
        assert!(queue.is_empty());
        assert_eq!(queue.next_due(), None);
    }

    #[test]
    fn test_order_by_due_then_insertion() {
        let mut queue = DeferredQueue::new();
        queue.schedule(500, Deferred::ClearJustCompleted);
        queue.schedule(100, Deferred::ValidateAnswer { generation: 2 });
        queue.schedule(100, Deferred::ValidateAnswer { generation: 3 });
        queue.schedule(900, Deferred::ValidateAnswer { generation: 4 });

        let fired = queue.take_due(600);
        assert_eq!(
            fired,
            vec![
                Deferred::ValidateAnswer { generation: 2 },
                Deferred::ValidateAnswer { generation: 3 },
                Deferred::ClearJustCompleted,
            ]
        );
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_cancel_matching() {
        let mut queue = DeferredQueue::new();
        queue.schedule(300, Deferred::ValidateAnswer { generation: 1 });
        queue.schedule(400, Deferred::ClearJustCompleted);
        queue.schedule(500, Deferred::ValidateAnswer { generation: 1 });

        let dropped = queue.cancel(|action| matches!(action, Deferred::ValidateAnswer { .. }));
        assert_eq!(dropped, 2);
        assert_eq!(queue.next_due(), Some(400));
        assert_eq!(queue.take_due(1_000), vec![Deferred::ClearJustCompleted]);
    }

    #[test]
    fn test_clear() {
        let mut queue = DeferredQueue::new();
        queue.schedule(1, Deferred::ClearJustCompleted);
        queue.schedule(2, Deferred::ClearJustCompleted);

        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.take_due(u64::MAX).is_empty());
    }
}
