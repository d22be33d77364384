//! # Scheduler
//!
//! Fire-once timers on a virtual clock.
//!
//! The scheduler never looks at the wall clock. Its owner feeds elapsed time in
//! and pulls out whatever came due, so the same session runs identically under
//! a real-time driver and in tests that jump the clock forward.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle to a scheduled timer, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Virtual-time queue of fire-once tasks.
///
/// Tasks due at the same instant fire in the order they were scheduled.
///
/// # Examples
///
/// ```
/// use pokehunt::Scheduler;
/// use std::time::Duration;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(Duration::from_millis(100), "late");
/// scheduler.schedule(Duration::from_millis(50), "early");
///
/// let deadline = scheduler.now() + Duration::from_millis(100);
/// assert_eq!(scheduler.pop_due(deadline), Some("early"));
/// assert_eq!(scheduler.pop_due(deadline), Some("late"));
/// assert_eq!(scheduler.pop_due(deadline), None);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), T>,
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler with its clock at zero.
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules `task` to fire `delay` after the current virtual time.
    ///
    /// A timer that would fall due past the end of the clock can never fire
    /// and is not stored.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        match self.now.checked_add(delay) {
            Some(due) => {
                self.pending.insert((due, id), task);
            }
            None => log::trace!("Timer {id:?} falls past the end of the clock, dropped"),
        }
        id
    }

    /// Cancels one timer, returning its task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.pending.keys().find(|(_, timer)| *timer == id).copied()?;
        self.pending.remove(&key)
    }

    /// Cancels every pending timer and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Cancels every pending timer whose task matches `predicate`.
    pub fn cancel_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, task| !predicate(task));
        before - self.pending.len()
    }

    /// Removes the earliest task due at or before `deadline` and moves the
    /// clock to its due time.
    pub fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let (&(due, _), _) = self.pending.first_key_value()?;
        if due > deadline {
            return None;
        }
        let ((due, _), task) = self.pending.pop_first()?;
        self.now = self.now.max(due);
        Some(task)
    }

    /// Moves the clock forward to `deadline` once everything due has fired.
    pub fn settle(&mut self, deadline: Duration) {
        self.now = self.now.max(deadline);
    }

    /// Due time of the next pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}
