//! One-shot deferred flip with an explicit cancellable handle.
//!
//! Holds at most one pending flip. Scheduling replaces whatever was pending,
//! so a stale flip can never fire against a newer card.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipHandle(u64);

#[derive(Clone, Copy, Debug)]
struct PendingFlip {
    handle: FlipHandle,
    due: Instant,
}

#[derive(Debug, Default)]
pub struct FlipTimer {
    pending: Option<PendingFlip>,
    next_id: u64,
}

impl FlipTimer {
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> FlipHandle {
        self.next_id += 1;
        let handle = FlipHandle(self.next_id);
        self.pending = Some(PendingFlip {
            handle,
            due: now + delay,
        });
        handle
    }

    /// Drops the pending flip, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn pending(&self) -> Option<FlipHandle> {
        self.pending.map(|p| p.handle)
    }

    /// Consumes the pending flip when it is due.
    pub fn fire_if_due(&mut self, now: Instant) -> Option<FlipHandle> {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                Some(p.handle)
            }
            _ => None,
        }
    }

    pub fn due_in(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut timer = FlipTimer::default();
        let start = Instant::now();
        let handle = timer.schedule(start, Duration::from_millis(3000));

        assert_eq!(timer.fire_if_due(start + Duration::from_millis(2999)), None);
        assert_eq!(
            timer.fire_if_due(start + Duration::from_millis(3000)),
            Some(handle)
        );
        assert_eq!(timer.fire_if_due(start + Duration::from_secs(10)), None);
    }

    #[test]
    fn test_reschedule_replaces_pending() {
        let mut timer = FlipTimer::default();
        let start = Instant::now();
        let first = timer.schedule(start, Duration::from_secs(3));
        let second = timer.schedule(start + Duration::from_secs(1), Duration::from_secs(3));

        assert_ne!(first, second);
        assert_eq!(timer.pending(), Some(second));
        assert_eq!(timer.fire_if_due(start + Duration::from_secs(3)), None);
        assert_eq!(
            timer.fire_if_due(start + Duration::from_secs(4)),
            Some(second)
        );
    }

    #[test]
    fn test_cancel() {
        let mut timer = FlipTimer::default();
        let start = Instant::now();
        timer.schedule(start, Duration::from_secs(3));

        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.due_in(start), None);
        assert_eq!(timer.fire_if_due(start + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_due_in_saturates() {
        let mut timer = FlipTimer::default();
        let start = Instant::now();
        timer.schedule(start, Duration::from_secs(3));

        assert_eq!(timer.due_in(start), Some(Duration::from_secs(3)));
        assert_eq!(
            timer.due_in(start + Duration::from_secs(5)),
            Some(Duration::ZERO)
        );
    }
}
