//! Common update/report cycle shared by every simulated bee.

use crate::reporter::OutputGuard;
use hive_domain::{AgentKind, Point2D};
use std::io::{self, Write};

/// A simulated entity driven by one execution unit.
pub trait Agent: Send {
    fn kind(&self) -> AgentKind;

    fn position(&self) -> Point2D;

    /// Advance the agent by `dt` simulated time units; `t` is the
    /// agent-local simulated time of this step.
    fn update(&mut self, t: f64, dt: f64);

    /// Print the current position through the shared guard.
    fn report<W: Write>(&self, guard: &OutputGuard<W>) -> io::Result<()> {
        guard.report(self.kind(), self.position())
    }
}
