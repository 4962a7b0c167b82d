//! Trailing-edge debounce driven by the app tick.
//!
//! Each `schedule` overwrites the pending deadline; `fire` reports true
//! exactly once after the deadline passes. Time is passed in so tests
//! never sleep.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and applying a search query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy)]
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

    /// Restart the timer from `now`.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the deadline has passed; clears it.
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

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(start);

        assert!(!d.fire(start + Duration::from_millis(199)));
        assert!(d.fire(start + SEARCH_DEBOUNCE));
        assert!(!d.fire(start + Duration::from_secs(5)));
        assert!(!d.is_pending());
    }

    #[test]
    fn reschedule_pushes_deadline() {
        let start = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(start);
        d.schedule(start + Duration::from_millis(150));

        assert!(!d.fire(start + Duration::from_millis(250)));
        assert!(d.fire(start + Duration::from_millis(350)));
    }

    #[test]
    fn cancel_suppresses_fire() {
        let start = Instant::now();
        let mut d = Debouncer::default();
        d.schedule(start);
        d.cancel();
        assert!(!d.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn idle_never_fires() {
        let mut d = Debouncer::default();
        assert!(!d.fire(Instant::now()));
    }
}
