//! Tick sources for the timer engine.
//!
//! A tick source is the "repeat every second, cancellable" capability the
//! engine depends on. The engine arms it on `start()` and disarms it on
//! pause, reset, skip and completion.
//!
//! - `IntervalTickSource`: backed by `tokio::time::Interval`, polled by the
//!   engine driver task
//! - `ManualTickSource`: records arm/disarm calls; ticks are invoked by hand

use tokio::time::{interval_at, Duration, Instant, Interval, MissedTickBehavior};

/// Period between ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TickSource
// ============================================================================

/// A cancellable periodic schedule.
///
/// Both operations are idempotent: arming an armed source keeps the existing
/// schedule, disarming an unarmed source does nothing.
pub trait TickSource {
    /// Starts the periodic schedule if it is not already active.
    fn arm(&mut self);

    /// Cancels the periodic schedule.
    fn disarm(&mut self);

    /// Returns true if the schedule is active.
    fn is_armed(&self) -> bool;
}

// ============================================================================
// IntervalTickSource
// ============================================================================

/// Tick source backed by a tokio interval.
///
/// The interval is owned by whoever polls [`IntervalTickSource::fired`], so a
/// disarm takes effect before the next poll and no stale tick can be
/// delivered.
#[derive(Debug)]
pub struct IntervalTickSource {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTickSource {
    /// Creates a disarmed source ticking once per second.
    pub fn new() -> Self {
        Self::with_period(TICK_PERIOD)
    }

    /// Creates a disarmed source with a custom period.
    pub fn with_period(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Completes at the next scheduled tick.
    ///
    /// Never completes while disarmed.
    pub async fn fired(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Default for IntervalTickSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for IntervalTickSource {
    fn arm(&mut self) {
        if self.interval.is_some() {
            return;
        }
        // First tick one full period after arming, not immediately.
        let mut interval = interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }
}

// ============================================================================
// ManualTickSource
// ============================================================================

/// Tick source for tests and for callers that drive ticks themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualTickSource {
    armed: bool,
    arm_count: u32,
    disarm_count: u32,
}

impl ManualTickSource {
    /// Creates a disarmed source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the source went from disarmed to armed.
    pub fn arm_count(&self) -> u32 {
        self.arm_count
    }

    /// Number of times an armed source was cancelled.
    pub fn disarm_count(&self) -> u32 {
        self.disarm_count
    }
}

impl TickSource for ManualTickSource {
    fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.arm_count += 1;
        }
    }

    fn disarm(&mut self) {
        if self.armed {
            self.armed = false;
            self.disarm_count += 1;
        }
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod manual_tick_source_tests {
        use super::*;

        #[test]
        fn test_new_is_disarmed() {
            let source = ManualTickSource::new();
            assert!(!source.is_armed());
            assert_eq!(source.arm_count(), 0);
            assert_eq!(source.disarm_count(), 0);
        }

        #[test]
        fn test_arm_is_idempotent() {
            let mut source = ManualTickSource::new();
            source.arm();
            source.arm();
            assert!(source.is_armed());
            assert_eq!(source.arm_count(), 1);
        }

        #[test]
        fn test_disarm_unarmed_is_noop() {
            let mut source = ManualTickSource::new();
            source.disarm();
            assert!(!source.is_armed());
            assert_eq!(source.disarm_count(), 0);
        }

        #[test]
        fn test_arm_disarm_cycle() {
            let mut source = ManualTickSource::new();
            source.arm();
            source.disarm();
            source.disarm();
            source.arm();
            assert!(source.is_armed());
            assert_eq!(source.arm_count(), 2);
            assert_eq!(source.disarm_count(), 1);
        }
    }

    mod interval_tick_source_tests {
        use super::*;
        use tokio::time::timeout;

        fn assert_close(actual: Duration, expected: Duration) {
            let diff = if actual > expected {
                actual - expected
            } else {
                expected - actual
            };
            assert!(
                diff <= Duration::from_millis(5),
                "expected ~{:?}, got {:?}",
                expected,
                actual
            );
        }

        #[test]
        fn test_default_period() {
            let source = IntervalTickSource::new();
            assert_eq!(source.period(), Duration::from_secs(1));
            assert!(!source.is_armed());
        }

        #[tokio::test(start_paused = true)]
        async fn test_fires_after_one_period() {
            let mut source = IntervalTickSource::new();
            source.arm();

            let start = Instant::now();
            source.fired().await;
            assert_close(start.elapsed(), Duration::from_secs(1));

            source.fired().await;
            assert_close(start.elapsed(), Duration::from_secs(2));
        }

        #[tokio::test(start_paused = true)]
        async fn test_rearm_keeps_schedule() {
            let mut source = IntervalTickSource::new();
            source.arm();
            tokio::time::advance(Duration::from_millis(600)).await;

            let start = Instant::now();
            source.arm();
            source.fired().await;
            assert_close(start.elapsed(), Duration::from_millis(400));
        }

        #[tokio::test(start_paused = true)]
        async fn test_disarmed_never_fires() {
            let mut source = IntervalTickSource::new();
            source.arm();
            source.disarm();
            source.disarm();

            let result = timeout(Duration::from_secs(5), source.fired()).await;
            assert!(result.is_err(), "disarmed source must not fire");
        }
    }
}
