// SPDX-License-Identifier: MPL-2.0
//! Virtual one-shot timer queue.
//!
//! `Scheduler` keeps its own notion of "now" that only moves when the owner
//! advances it. The application advances it by wall-clock time on every tick,
//! tests advance it by exact amounts. Timers are plain values of type `E`
//! handed back to the owner when due, so firing a timer never needs a closure
//! or shared ownership.

use std::time::Duration;

/// Handle returned by [`Scheduler::schedule`], used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Debug, Clone)]
struct Pending<E> {
    id: TimerId,
    due_at: Duration,
    event: E,
}

/// Deterministic timer queue driven by an explicit clock.
#[derive(Debug, Clone)]
pub struct Scheduler<E> {
    now: Duration,
    next_id: u64,
    /// Sorted by `(due_at, id)`; ties fire in scheduling order.
    pending: Vec<Pending<E>>,
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<E> Scheduler<E> {
    /// Creates an empty scheduler whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `event` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;

        let due_at = self.now.saturating_add(delay);
        let index = self
            .pending
            .partition_point(|pending| (pending.due_at, pending.id) <= (due_at, id));
        self.pending.insert(index, Pending { id, due_at, event });
        id
    }

    /// Cancels a pending timer.
    ///
    /// Returns `true` if the timer was still pending. Cancelling a timer that
    /// already fired or was already cancelled is a no-op.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        if let Some(pos) = self.pending.iter().position(|pending| pending.id == id) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Returns whether the timer is still pending.
    #[must_use]
    pub fn contains(&self, id: TimerId) -> bool {
        self.pending.iter().any(|pending| pending.id == id)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.first().map(|pending| pending.due_at)
    }

    /// Removes and returns the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's deadline so anything the caller
    /// schedules in response is measured from the moment the timer fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerId, E)> {
        let first = self.pending.first()?;
        if first.due_at > until {
            return None;
        }

        let pending = self.pending.remove(0);
        self.now = self.now.max(pending.due_at);
        Some((pending.id, pending.event))
    }

    /// Moves the clock forward to `until` without firing anything.
    ///
    /// Callers drain [`Scheduler::pop_due`] first; the clock never moves
    /// backwards.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Drops every pending timer and returns how many were cleared.
    pub fn clear(&mut self) -> usize {
        let cleared = self.pending.len();
        self.pending.clear();
        cleared
    }
}
