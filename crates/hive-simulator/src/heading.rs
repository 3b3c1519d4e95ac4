//! Uniform heading source for drone direction changes.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Uniform};
use std::f64::consts::TAU;
use std::time::{SystemTime, UNIX_EPOCH};

/// Draws headings uniformly from `[0, 2π)` using an owned generator.
#[derive(Debug, Clone)]
pub struct RandomDirectionSource<R = StdRng> {
    rng: R,
    angle: Uniform<f64>,
}

impl<R: Rng> RandomDirectionSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            angle: Uniform::new(0.0, TAU),
        }
    }

    /// Next heading in radians.
    pub fn next_heading(&mut self) -> f64 {
        self.angle.sample(&mut self.rng)
    }
}

impl RandomDirectionSource<StdRng> {
    /// Reproducible source for a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded once from the current system time.
    #[must_use]
    pub fn from_system_time() -> Self {
        Self::seeded(system_time_seed())
    }
}

/// Seed derived from the wall clock, in nanoseconds since the Unix epoch.
#[must_use]
pub fn system_time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
