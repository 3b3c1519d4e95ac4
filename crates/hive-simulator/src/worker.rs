//! Worker bee shuttling between its home point and the origin.

use crate::agent::Agent;
use hive_domain::{AgentKind, DomainError, HOME_POINT, ORIGIN, Point2D, validate_speed};
use tracing::debug;

/// Remaining distance below which a step counts as arriving on the target.
/// Larger than any per-coordinate rounding error over the home-origin leg.
const ARRIVAL_SLACK: f64 = 1e-8;

/// Worker bee state machine.
///
/// Starts at home heading for the origin. `returning` is true on the leg
/// back home and flips each time the current target is reached.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkerAgent {
    position: Point2D,
    home: Point2D,
    target: Point2D,
    speed: f64,
    returning: bool,
}

impl WorkerAgent {
    /// Create a worker at `HOME_POINT` bound for `ORIGIN`.
    pub fn new(speed: f64) -> Result<Self, DomainError> {
        Ok(Self {
            position: HOME_POINT,
            home: HOME_POINT,
            target: ORIGIN,
            speed: validate_speed(speed)?,
            returning: false,
        })
    }

    #[must_use]
    pub const fn target(&self) -> Point2D {
        self.target
    }

    #[must_use]
    pub const fn is_returning(&self) -> bool {
        self.returning
    }

    #[must_use]
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    fn step(&mut self, dt: f64) {
        let step = self.speed * dt;
        let dx = self.target.x - self.position.x;
        let dy = self.target.y - self.position.y;
        let distance = dx.hypot(dy);

        if step > 0.0 && distance <= step + ARRIVAL_SLACK {
            self.position = self.target;
            self.returning = !self.returning;
            self.target = if self.returning { self.home } else { ORIGIN };
            debug!(
                returning = self.returning,
                target = %self.target,
                "Worker reached target, switching leg"
            );
        } else if distance > f64::EPSILON {
            self.position.x += step * (dx / distance);
            self.position.y += step * (dy / distance);
        }
    }
}

impl Agent for WorkerAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Worker
    }

    fn position(&self) -> Point2D {
        self.position
    }

    fn update(&mut self, _t: f64, dt: f64) {
        self.step(dt);
    }
}
