//! Drone bee performing a random walk with periodic heading changes.

use crate::agent::Agent;
use crate::heading::RandomDirectionSource;
use hive_domain::{AgentKind, DomainError, ORIGIN, Point2D, validate_interval, validate_speed};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Drone bee state.
#[derive(Debug, Clone)]
pub struct DroneAgent<R = StdRng> {
    position: Point2D,
    speed: f64,
    /// Heading in radians, `[0, 2π)`
    heading: f64,
    change_interval: f64,
    last_change: f64,
    directions: RandomDirectionSource<R>,
}

impl<R: Rng> DroneAgent<R> {
    /// Create a drone at the origin with an initial heading drawn from `directions`.
    pub fn new(
        speed: f64,
        change_interval: f64,
        mut directions: RandomDirectionSource<R>,
    ) -> Result<Self, DomainError> {
        let speed = validate_speed(speed)?;
        let change_interval = validate_interval(change_interval)?;
        let heading = directions.next_heading();

        Ok(Self {
            position: ORIGIN,
            speed,
            heading,
            change_interval,
            last_change: 0.0,
            directions,
        })
    }

    #[must_use]
    pub const fn heading(&self) -> f64 {
        self.heading
    }

    #[must_use]
    pub const fn last_change(&self) -> f64 {
        self.last_change
    }

    #[must_use]
    pub const fn change_interval(&self) -> f64 {
        self.change_interval
    }

    fn maybe_change_heading(&mut self, t: f64) {
        if t - self.last_change >= self.change_interval {
            self.heading = self.directions.next_heading();
            self.last_change = t;
            debug!(t, heading = self.heading, "Drone changed heading");
        }
    }
}

impl<R: Rng + Send> Agent for DroneAgent<R> {
    fn kind(&self) -> AgentKind {
        AgentKind::Drone
    }

    fn position(&self) -> Point2D {
        self.position
    }

    fn update(&mut self, t: f64, dt: f64) {
        self.maybe_change_heading(t);

        let distance = self.speed * dt;
        self.position.x += distance * self.heading.cos();
        self.position.y += distance * self.heading.sin();
    }
}
