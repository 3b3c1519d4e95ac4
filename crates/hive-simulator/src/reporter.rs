//! Console reporter serializing position lines across execution units.

use hive_domain::{AgentKind, Point2D};
use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

/// Shared output sink guarded by a single mutex.
///
/// The lock is held for exactly one line, so lines from different agents
/// may interleave in any order but never character by character.
#[derive(Debug)]
pub struct OutputGuard<W> {
    sink: Mutex<W>,
}

impl OutputGuard<Stdout> {
    /// Guard around the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputGuard<W> {
    pub const fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Write one `<label> Position: (<x>, <y>)` line.
    pub fn report(&self, kind: AgentKind, position: Point2D) -> io::Result<()> {
        let line = format_position_line(kind, position);
        // A panic in another unit while holding the lock leaves the sink usable.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "{line}")?;
        sink.flush()
    }

    /// Consume the guard and hand back the sink.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Render a position line without the trailing newline.
#[must_use]
pub fn format_position_line(kind: AgentKind, position: Point2D) -> String {
    format!("{} Position: {position}", kind.as_str())
}
