//! Real-time pacing between simulation steps.

use std::thread;
use std::time::Duration;

/// Pause applied by an execution unit after each reported step.
pub trait Pacer: Sync {
    /// Suspend the calling thread for one step of simulated length `dt`.
    fn pause(&self, dt: f64);
}

/// Sleeps `dt * seconds_per_unit` of wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreadSleepPacer {
    seconds_per_unit: f64,
}

impl ThreadSleepPacer {
    #[must_use]
    pub const fn new(seconds_per_unit: f64) -> Self {
        Self { seconds_per_unit }
    }

    /// Wall-clock duration for a step of simulated length `dt`.
    #[must_use]
    pub fn duration_for(&self, dt: f64) -> Duration {
        let secs = dt * self.seconds_per_unit;
        if secs.is_finite() && secs > 0.0 {
            Duration::from_secs_f64(secs)
        } else {
            Duration::ZERO
        }
    }
}

impl Default for ThreadSleepPacer {
    /// One second of wall clock per simulated time unit.
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Pacer for ThreadSleepPacer {
    fn pause(&self, dt: f64) {
        let duration = self.duration_for(dt);
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// Runs the full simulated duration without any real-time delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self, _dt: f64) {}
}
