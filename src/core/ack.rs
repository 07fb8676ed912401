//! Timed "saved" acknowledgment.
//!
//! The dismissal is a single deadline rather than a running timer: starting
//! it again replaces the pending deadline, so repeated saves never stack.

use std::time::{Duration, Instant};

/// Upper bound for the configured delay.
pub const MAX_ACK_DELAY: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone)]
pub struct Acknowledgment {
    delay: Duration,
    until: Option<Instant>,
}

impl Acknowledgment {
    /// `delay` is capped at [`MAX_ACK_DELAY`].
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.min(MAX_ACK_DELAY),
            until: None,
        }
    }

    /// Show the acknowledgment from `now` on, cancelling a pending dismissal.
    pub fn start(&mut self, now: Instant) {
        self.until = Some(now.checked_add(self.delay).unwrap_or(now));
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    pub fn is_visible(&self, now: Instant) -> bool {
        matches!(self.until, Some(t) if now < t)
    }

    /// Time until dismissal, `None` when nothing is pending.
    pub fn time_left(&self, now: Instant) -> Option<Duration> {
        self.until.map(|t| t.saturating_duration_since(now))
    }

    /// Drop an elapsed deadline. Returns true when the acknowledgment was
    /// dismissed by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.until {
            Some(t) if now >= t => {
                self.until = None;
                true
            }
            _ => false,
        }
    }
}
