//! Cancellable timers driven by an externally supplied clock.
//!
//! Neither timer runs anything by itself: the owner asks each one whether it
//! is due and, if so, performs the corresponding action.  This keeps all game
//! state on one thread with no callbacks holding references into it.
use std::time::{Duration, Instant};

/// A repeating timer that fires every `interval` until stopped
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct TickScheduler {
    interval: Duration,
    next: Option<Instant>,
}

impl TickScheduler {
    /// Create a stopped scheduler that will tick every `interval` once
    /// started
    pub(crate) fn new(interval: Duration) -> TickScheduler {
        TickScheduler {
            interval,
            next: None,
        }
    }

    /// Cancel any pending tick and start ticking every `interval`, with the
    /// first tick one interval after `now`
    pub(crate) fn restart(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next = Some(now + interval);
    }

    pub(crate) fn stop(&mut self) {
        self.next = None;
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.next.is_some()
    }

    #[cfg(test)]
    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    /// Return when the next tick is scheduled, if the scheduler is running
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// If a tick is due at or before `now`, schedule the following tick and
    /// return the time at which the due tick was meant to fire.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<Instant> {
        let when = self.next.filter(|&t| t <= now)?;
        self.next = Some(when + self.interval);
        Some(when)
    }
}

/// A timer that fires once and then disarms itself
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct OneShot {
    deadline: Option<Instant>,
}

impl OneShot {
    /// Cancel any pending firing and arm the timer to fire `delay` after
    /// `now`
    pub(crate) fn start(&mut self, delay: Duration, now: Instant) {
        self.deadline = Some(now + delay);
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// If the timer is due at or before `now`, disarm it and return the time
    /// at which it was meant to fire.
    pub(crate) fn take_due(&mut self, now: Instant) -> Option<Instant> {
        let when = self.deadline.filter(|&t| t <= now)?;
        self.deadline = None;
        Some(when)
    }
}
