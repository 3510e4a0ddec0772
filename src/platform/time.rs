//! Host time to simulation ticks

use std::time::Duration;

use crate::consts::TICKS_PER_SECOND;

/// Convert an elapsed duration into whole ticks
pub fn ticks_for(elapsed: Duration) -> u64 {
    let ticks = elapsed.as_nanos() * u128::from(TICKS_PER_SECOND) / 1_000_000_000;
    u64::try_from(ticks).unwrap_or(u64::MAX)
}

/// Shortest elapsed time that reaches `ticks`
pub fn elapsed_for(ticks: u64) -> Duration {
    let whole = Duration::from_secs(ticks / TICKS_PER_SECOND);
    let part = (ticks % TICKS_PER_SECOND * 1_000_000_000).div_ceil(TICKS_PER_SECOND);
    whole + Duration::from_nanos(part)
}

/// Monotonic frame clock fed with the host's elapsed time.
///
/// Readings never decrease, even if the host reports an earlier time.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick for a duration since start, as reported by the host
    pub fn observe(&mut self, elapsed: Duration) -> u64 {
        self.last = self.last.max(ticks_for(elapsed));
        self.last
    }

    pub fn last(&self) -> u64 {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_for() {
        assert_eq!(ticks_for(Duration::ZERO), 0);
        assert_eq!(ticks_for(Duration::from_millis(16)), 0);
        assert_eq!(ticks_for(Duration::from_millis(17)), 1);
        assert_eq!(ticks_for(Duration::from_secs(1)), TICKS_PER_SECOND);
        assert_eq!(ticks_for(Duration::from_millis(2_500)), 150);
    }

    #[test]
    fn test_elapsed_for_inverts_ticks_for() {
        for ticks in [0, 1, 59, 60, 61, 3_599, 1_000_003] {
            let elapsed = elapsed_for(ticks);
            assert_eq!(ticks_for(elapsed), ticks);
            if ticks > 0 {
                assert_eq!(ticks_for(elapsed - Duration::from_nanos(1)), ticks - 1);
            }
        }
    }

    #[test]
    fn test_elapsed_for_huge_tick_counts() {
        let elapsed = elapsed_for(u64::MAX);
        assert_eq!(elapsed.as_secs(), u64::MAX / TICKS_PER_SECOND);
    }

    #[test]
    fn test_clock_never_goes_back() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.observe(Duration::from_secs(2)), 120);
        assert_eq!(clock.observe(Duration::from_secs(1)), 120);
        assert_eq!(clock.observe(Duration::from_millis(2_050)), 123);
        assert_eq!(clock.last(), 123);
    }
}
