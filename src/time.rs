//! Time sources for clock-derived seeds.
//!
//! Seeds taken from the clock are whole seconds since the Unix epoch,
//! truncated toward zero. The [`Clock`] trait lets tests inject a fixed time
//! instead of reading the wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for reading the current time in whole seconds.
pub trait Clock {
    /// Seconds since the Unix epoch, truncated toward zero.
    fn now_secs(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> i64 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => secs_to_i64(elapsed.as_secs()),
            // Before the epoch: -1.5s truncates toward zero to -1.
            Err(before) => -secs_to_i64(before.duration().as_secs()),
        }
    }
}

fn secs_to_i64(secs: u64) -> i64 {
    i64::try_from(secs).unwrap_or(i64::MAX)
}

/// Clock frozen at a fixed second count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_secs(&self) -> i64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_secs(&self) -> i64 {
        (**self).now_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        assert_eq!(FixedClock(1_700_000_000).now_secs(), 1_700_000_000);
        assert_eq!(FixedClock(-5).now_secs(), -5);
    }

    #[test]
    fn test_system_clock_matches_wall_time() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_secs() as i64;
        let now = SystemClock.now_secs();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock after epoch")
            .as_secs() as i64;
        assert!(before <= now && now <= after, "{before} <= {now} <= {after}");
    }

    #[test]
    fn test_clock_through_reference() {
        let clock = FixedClock(12);
        let by_ref: &dyn Clock = &clock;
        assert_eq!(by_ref.now_secs(), 12);
        assert_eq!((&clock).now_secs(), 12);
    }
}
