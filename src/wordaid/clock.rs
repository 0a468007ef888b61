//! Time source abstraction.
//!
//! Word timestamps come from a `Clock` rather than `Utc::now()` directly so
//! tests can drive time deterministically. Production code uses
//! [`SystemClock`]; tests use the fixed/stepping clocks from [`fixtures`].

use chrono::{DateTime, Utc};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::Clock;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::Cell;

    /// A clock that starts at a fixed instant and advances by a fixed step
    /// on every `now()` call, so successive timestamps are distinct and
    /// strictly increasing.
    pub struct SteppingClock {
        current: Cell<DateTime<Utc>>,
        step: Duration,
    }

    impl SteppingClock {
        pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
            Self {
                current: Cell::new(start),
                step,
            }
        }

        /// Starts at 2024-01-01T00:00:00Z, one second per tick.
        pub fn default_start() -> Self {
            let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
            Self::new(start, Duration::seconds(1))
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            let now = self.current.get();
            self.current.set(now + self.step);
            now
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::SteppingClock;
    use super::*;

    #[test]
    fn stepping_clock_is_strictly_increasing() {
        let clock = SteppingClock::default_start();
        let a = clock.now();
        let b = clock.now();
        let c = clock.now();
        assert!(a < b && b < c);
    }
}
