//! Timer scheduler
//!
//! Holds one-shot timers keyed by [`TimerId`]. Timers carry a payload
//! instead of a callback: the owner pops due timers and dispatches the
//! payload itself, so a fired timer can only touch state the owner still
//! holds. Dropping the scheduler drops every pending timer with it.

use crate::clock::VirtualClock;
use glint_core::Timestamp;
use slotmap::{new_key_type, SlotMap};
use std::time::Duration;

new_key_type! {
    /// Handle to a scheduled timer
    pub struct TimerId;
}

struct PendingTimer<E> {
    deadline: Timestamp,
    /// Insertion order, breaks ties between equal deadlines
    order: u64,
    payload: E,
}

/// A timer that reached its deadline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FiredTimer<E> {
    pub id: TimerId,
    pub deadline: Timestamp,
    pub payload: E,
}

/// Single-threaded one-shot timer queue driven by a [`VirtualClock`]
pub struct TimerScheduler<E> {
    clock: VirtualClock,
    timers: SlotMap<TimerId, PendingTimer<E>>,
    next_order: u64,
}

impl<E> TimerScheduler<E> {
    pub fn new() -> Self {
        Self {
            clock: VirtualClock::new(),
            timers: SlotMap::with_key(),
            next_order: 0,
        }
    }

    /// Current scheduler time
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    /// Schedule `payload` to fire `delay` from now
    pub fn schedule(&mut self, delay: Duration, payload: E) -> TimerId {
        let deadline = self.clock.now() + delay;
        let order = self.next_order;
        self.next_order += 1;
        let id = self.timers.insert(PendingTimer {
            deadline,
            order,
            payload,
        });
        tracing::trace!(?id, %deadline, "timer scheduled");
        id
    }

    /// Cancel a pending timer, returning its payload if it had not fired
    pub fn cancel(&mut self, id: TimerId) -> Option<E> {
        let timer = self.timers.remove(id)?;
        tracing::trace!(?id, deadline = %timer.deadline, "timer cancelled");
        Some(timer.payload)
    }

    /// Whether `id` is still waiting to fire
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the earliest pending timer
    pub fn next_deadline(&self) -> Option<Timestamp> {
        self.timers.values().map(|t| t.deadline).min()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to the fired timer's deadline, so the owner observes
    /// `now()` equal to the moment the timer was due while dispatching it.
    pub fn pop_due(&mut self, until: Timestamp) -> Option<FiredTimer<E>> {
        let (id, _) = self
            .timers
            .iter()
            .filter(|(_, t)| t.deadline <= until)
            .min_by_key(|(_, t)| (t.deadline, t.order))?;
        let timer = self.timers.remove(id)?;
        self.clock.advance_to(timer.deadline);
        tracing::trace!(?id, deadline = %timer.deadline, "timer fired");
        Some(FiredTimer {
            id,
            deadline: timer.deadline,
            payload: timer.payload,
        })
    }

    /// Move the clock to `until` without firing anything.
    ///
    /// Call after draining [`pop_due`](Self::pop_due) for the same target.
    pub fn advance_clock_to(&mut self, until: Timestamp) {
        self.clock.advance_to(until);
    }

    /// Drop every pending timer
    pub fn clear(&mut self) {
        if !self.timers.is_empty() {
            tracing::trace!(count = self.timers.len(), "clearing pending timers");
        }
        self.timers.clear();
    }
}

impl<E> Default for TimerScheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    /// Fire everything due within `elapsed`, the way an owner drains it
    fn advance<E>(timers: &mut TimerScheduler<E>, elapsed: Duration) -> Vec<FiredTimer<E>> {
        let until = timers.now() + elapsed;
        let mut fired = Vec::new();
        while let Some(timer) = timers.pop_due(until) {
            fired.push(timer);
        }
        timers.advance_clock_to(until);
        fired
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let mut timers = TimerScheduler::new();
        timers.schedule(ms(500), "settle");
        timers.schedule(ms(200), "commit");

        let fired: Vec<_> = advance(&mut timers, ms(600))
            .into_iter()
            .map(|t| t.payload)
            .collect();
        assert_eq!(fired, vec!["commit", "settle"]);
        assert_eq!(timers.now(), Timestamp::from_millis(600));
        assert_eq!(timers.pending_count(), 0);
    }

    #[test]
    fn test_timer_not_due_before_deadline() {
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(ms(200), ());

        assert!(advance(&mut timers, ms(199)).is_empty());
        assert!(timers.is_pending(id));

        let fired = advance(&mut timers, ms(1));
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].deadline, Timestamp::from_millis(200));
    }

    #[test]
    fn test_equal_deadlines_fire_in_schedule_order() {
        let mut timers = TimerScheduler::new();
        timers.schedule(ms(100), 1);
        timers.schedule(ms(100), 2);
        timers.schedule(ms(100), 3);

        let fired: Vec<_> = advance(&mut timers, ms(100))
            .into_iter()
            .map(|t| t.payload)
            .collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancelled_timer_never_fires() {
        let mut timers = TimerScheduler::new();
        let id = timers.schedule(ms(50), "stale");
        timers.schedule(ms(80), "fresh");

        assert_eq!(timers.cancel(id), Some("stale"));
        assert_eq!(timers.cancel(id), None);

        let fired: Vec<_> = advance(&mut timers, ms(100))
            .into_iter()
            .map(|t| t.payload)
            .collect();
        assert_eq!(fired, vec!["fresh"]);
    }

    #[test]
    fn test_pop_due_moves_clock_to_deadline() {
        let mut timers = TimerScheduler::new();
        timers.schedule(ms(200), ());
        timers.schedule(ms(500), ());

        let until = Timestamp::from_millis(1_000);
        let first = timers.pop_due(until).map(|t| t.deadline);
        assert_eq!(first, Some(Timestamp::from_millis(200)));
        assert_eq!(timers.now(), Timestamp::from_millis(200));

        assert!(timers.pop_due(until).is_some());
        assert!(timers.pop_due(until).is_none());
        timers.advance_clock_to(until);
        assert_eq!(timers.now(), until);
    }

    #[test]
    fn test_next_deadline_and_clear() {
        let mut timers = TimerScheduler::new();
        assert_eq!(timers.next_deadline(), None);

        advance(&mut timers, ms(10));
        timers.schedule(ms(500), ());
        timers.schedule(ms(200), ());
        assert_eq!(timers.next_deadline(), Some(Timestamp::from_millis(210)));

        timers.clear();
        assert_eq!(timers.next_deadline(), None);
        assert!(advance(&mut timers, ms(1_000)).is_empty());
    }
}
