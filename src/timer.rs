//! Deterministic timer queue.
//!
//! The original prototype sprinkles fire-and-forget timeouts through the
//! UI code. Here every delayed effect goes through one scheduler with an
//! explicit handle: one pending deadline per effect kind, rescheduling
//! replaces, and anything can be canceled. Time is passed in rather than
//! read, so the whole thing tests without sleeping.
//!
//! One-deadline-per-kind is enough for this demo: the event model is
//! single-threaded and every timer is rearmed, never stacked.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry<E> {
    effect: E,
    due: Instant,
    repeat: Option<Duration>,
}

/// Pending delayed effects, keyed by effect value.
#[derive(Debug, Default)]
pub struct Scheduler<E> {
    entries: Vec<Entry<E>>,
}

impl<E: Copy + PartialEq> Scheduler<E> {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Arm `effect` to fire once at `now + delay`. An existing deadline
    /// for the same effect is replaced.
    pub fn schedule_once(&mut self, effect: E, delay: Duration, now: Instant) {
        self.cancel(effect);
        self.entries.push(Entry {
            effect,
            due: now + delay,
            repeat: None,
        });
    }

    /// Arm `effect` to fire every `interval`, first at `now + interval`.
    /// An existing deadline for the same effect is replaced.
    pub fn schedule_every(&mut self, effect: E, interval: Duration, now: Instant) {
        self.cancel(effect);
        self.entries.push(Entry {
            effect,
            due: now + interval,
            repeat: Some(interval),
        });
    }

    /// Drop the pending deadline for `effect`, if any.
    pub fn cancel(&mut self, effect: E) {
        self.entries.retain(|e| e.effect != effect);
    }

    /// True if `effect` has a pending deadline.
    pub fn is_scheduled(&self, effect: E) -> bool {
        self.entries.iter().any(|e| e.effect == effect)
    }

    /// Remove and return every effect due at `now`, in deadline order.
    /// Repeating effects are rearmed one interval past their deadline.
    pub fn pop_due(&mut self, now: Instant) -> Vec<E> {
        let mut due: Vec<Entry<E>> = Vec::new();
        let mut remaining: Vec<Entry<E>> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        due.sort_by_key(|e| e.due);

        let mut fired = Vec::with_capacity(due.len());
        for entry in due {
            fired.push(entry.effect);
            if let Some(interval) = entry.repeat {
                remaining.push(Entry {
                    effect: entry.effect,
                    due: entry.due + interval,
                    repeat: Some(interval),
                });
            }
        }
        self.entries = remaining;
        fired
    }
}

// ============================================================================
// TESTS
// ============================================================================
