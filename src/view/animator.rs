//! Drives the on-screen track offset towards carousel scroll commands.
//!
//! Smooth commands become a smoothstep tween lasting the settle duration;
//! instant commands jump. A new smooth command mid-tween retargets from the
//! current sampled position.

use crate::carousel::{ScrollBehavior, ScrollCommand};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f64,
    to: f64,
    start: Duration,
    duration: Duration,
}

impl Tween {
    fn is_done(&self, now: Duration) -> bool {
        now.saturating_sub(self.start) >= self.duration
    }

    fn sample(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        let t = (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Displayed track offset, in columns.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimator {
    position: f64,
    tween: Option<Tween>,
    duration: Duration,
}

impl ScrollAnimator {
    /// Animator resting at `position`. Smooth scrolls take `duration` (at least 1ms).
    pub fn new(position: f64, duration: Duration) -> Self {
        Self {
            position,
            tween: None,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    /// Start following `command`.
    pub fn apply(&mut self, command: ScrollCommand, now: Duration) {
        match command.behavior {
            ScrollBehavior::Instant => {
                self.position = command.offset;
                self.tween = None;
            }
            ScrollBehavior::Smooth => {
                let from = self.position(now);
                self.position = from;
                self.tween = Some(Tween {
                    from,
                    to: command.offset,
                    start: now,
                    duration: self.duration,
                });
            }
        }
    }

    /// Offset to draw at `now`.
    pub fn position(&self, now: Duration) -> f64 {
        match self.tween {
            Some(tween) => tween.sample(now),
            None => self.position,
        }
    }

    /// True while a tween is in progress.
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Finish the tween if its time is up. Returns the resting offset when one
    /// completed during this call, which the caller reports as "scroll settled".
    pub fn advance(&mut self, now: Duration) -> Option<f64> {
        let tween = self.tween?;
        if !tween.is_done(now) {
            return None;
        }
        self.position = tween.to;
        self.tween = None;
        Some(self.position)
    }
}
