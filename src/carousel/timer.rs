//! Owned timer handles driven by explicit timestamps.
//!
//! Timers never sleep or spawn; the owner polls them with the current time.

use std::time::Duration;

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// A single pending deadline. Scheduling replaces any previous deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneShotTimer {
    deadline: Option<Duration>,
}

impl OneShotTimer {
    /// Idle timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for `now + delay`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Disarm the timer.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Pending deadline, if armed.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Returns true exactly once when `now` reaches the deadline, then disarms.
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// A fixed-period timer. Missed periods are coalesced into one firing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingTimer {
    period: Duration,
    next: Option<Duration>,
}

impl RepeatingTimer {
    /// Stopped timer with the given period (at least 1ms).
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next: None,
        }
    }

    /// Interval between firings.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start the timer; the first firing is one period after `now`.
    ///
    /// Returns false (and keeps the current phase) if already running.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.next.is_some() {
            return false;
        }
        self.next = Some(now + self.period);
        true
    }

    /// Stop the timer. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        self.next.take().is_some()
    }

    /// True while running.
    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    /// Next firing time, if running.
    pub fn deadline(&self) -> Option<Duration> {
        self.next
    }

    /// Returns true if at least one period elapsed since the last firing.
    pub fn fire(&mut self, now: Duration) -> bool {
        let Some(mut next) = self.next else {
            return false;
        };
        if now < next {
            return false;
        }
        while next <= now {
            next += self.period;
        }
        self.next = Some(next);
        true
    }
}
