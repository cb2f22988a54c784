//! Time sources for impression tracking.
//!
//! Handlers read the clock once per request and hand the instant to the
//! deduplicator, so the decision itself never looks at the wall clock.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::model::{now, Timestamp};

pub trait Clock: std::fmt::Debug + Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        now()
    }
}

/// Manually driven clock for tests.
///
/// Clones share the same instant, so advancing one clone advances them all.
#[derive(Debug, Clone)]
pub struct MockClock {
    current: Arc<Mutex<Timestamp>>,
}

impl MockClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, duration: chrono::Duration) {
        let mut current = self.current.lock();
        *current = *current + duration;
    }

    pub fn set(&self, time: Timestamp) {
        *self.current.lock() = time;
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = clock.now();

        assert!(t2 > t1);
    }

    #[test]
    fn mock_clock_is_shared_between_clones() {
        let start = Timestamp::parse("2025-01-01T00:00:00Z").unwrap();
        let clock = MockClock::new(start);
        let other = clock.clone();

        assert_eq!(clock.now(), start);

        other.advance(Duration::seconds(10));
        assert_eq!(clock.now(), start + Duration::seconds(10));

        let later = start + Duration::hours(2);
        clock.set(later);
        assert_eq!(other.now(), later);
    }
}
