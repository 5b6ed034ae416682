//! Cancellable deadline for the post-judgment auto-reset.
//!
//! The timer never sleeps or spawns anything. It records a deadline, and the
//! owner's event loop asks it whether the deadline has passed. Cancelling
//! drops the deadline, so a reset that was cancelled can never fire later.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct ResetTimer {
    delay: Duration,
    due_at: Option<Instant>,
}

impl ResetTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, due_at: None }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) -> Instant {
        let due_at = now + self.delay;
        self.due_at = Some(due_at);
        due_at
    }

    /// Disarm. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.due_at.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.due_at
    }

    /// Consume the deadline if it has passed. Returns true exactly once per
    /// scheduled deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.due_at {
            Some(due_at) if now >= due_at => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the deadline, if one is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.due_at.map(|due_at| due_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(1000);

    #[test]
    fn test_fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = ResetTimer::new(DELAY);
        timer.schedule(start);

        assert!(!timer.fire_if_due(start + Duration::from_millis(999)));
        assert!(timer.fire_if_due(start + DELAY));
        assert!(!timer.fire_if_due(start + DELAY * 2));
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancelled_never_fires() {
        let start = Instant::now();
        let mut timer = ResetTimer::new(DELAY);
        timer.schedule(start);

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert!(!timer.fire_if_due(start + DELAY * 5));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = ResetTimer::new(DELAY);
        timer.schedule(start);
        let later = start + Duration::from_millis(600);
        timer.schedule(later);

        assert!(!timer.fire_if_due(start + DELAY));
        assert_eq!(timer.remaining(start + DELAY), Some(Duration::from_millis(600)));
        assert!(timer.fire_if_due(later + DELAY));
    }
}
