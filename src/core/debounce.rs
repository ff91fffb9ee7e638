//! # Debouncer
//!
//! Trailing-edge debounce with its state out in the open: a delay and an
//! optional deadline. Every [`Debouncer::trigger`] pushes the deadline out;
//! [`Debouncer::fire`] reports `true` exactly once after the burst goes
//! quiet.
//!
//! Time is passed in by the caller so the event loop can use
//! `Instant::now()` while tests step a fake clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records an event: cancels any pending deadline and schedules a new one.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drops the pending deadline without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// How long until the pending deadline, `Duration::ZERO` if overdue.
    /// `None` when nothing is scheduled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Returns `true` (once) if the deadline has passed, clearing it.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
