//! # Simulation Configuration
//!
//! Fixed defaults for a bare run, overridable from the command line.

use crate::error::{Result, SimulationError};
use serde::{Deserialize, Serialize};

/// Slack applied when turning `total_time / time_step` into a step count,
/// so that e.g. `0.3 / 0.1` still counts as three whole steps.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on loop iterations per agent.
pub const MAX_ITERATIONS: u64 = 1_000_000_000;

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Worker bee speed in units per simulated time unit
    pub worker_speed: f64,

    /// Drone bee speed in units per simulated time unit
    pub drone_speed: f64,

    /// Simulated time between drone heading changes
    pub change_interval: f64,

    /// Simulated length of one step
    pub time_step: f64,

    /// Last simulated time reported (inclusive)
    pub total_time: f64,

    /// Wall-clock seconds slept per simulated time unit
    pub seconds_per_unit: f64,

    /// Fixed seed for the drone heading source; `None` seeds from the system time
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            worker_speed: 1.0,
            drone_speed: 1.0,
            change_interval: 5.0,
            time_step: 1.0,
            total_time: 20.0,
            seconds_per_unit: 1.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject values the driver cannot loop over.
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "time_step must be finite and > 0, got {}",
                self.time_step
            )));
        }
        if !(self.total_time.is_finite() && self.total_time >= 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "total_time must be finite and >= 0, got {}",
                self.total_time
            )));
        }
        if !(self.seconds_per_unit.is_finite() && self.seconds_per_unit >= 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "seconds_per_unit must be finite and >= 0, got {}",
                self.seconds_per_unit
            )));
        }
        let whole_steps = self.whole_steps();
        if whole_steps >= MAX_ITERATIONS as f64 {
            return Err(SimulationError::InvalidConfig(format!(
                "total_time / time_step gives {whole_steps} steps, limit is {MAX_ITERATIONS}"
            )));
        }
        Ok(())
    }

    /// Number of loop iterations per agent, counting both `t = 0` and the
    /// last step not past `total_time`.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        (self.whole_steps() as u64).saturating_add(1)
    }

    fn whole_steps(&self) -> f64 {
        (self.total_time / self.time_step + STEP_COUNT_TOLERANCE).floor()
    }

    /// Simulated time of a given step.
    #[must_use]
    pub fn time_at(&self, step: u64) -> f64 {
        step as f64 * self.time_step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_iterations() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.iterations(), 21);
        assert_eq!(config.time_at(20), 20.0);
    }

    #[test]
    fn test_iterations_without_float_drift() {
        let config = SimulationConfig {
            time_step: 0.1,
            total_time: 0.3,
            ..SimulationConfig::default()
        };
        assert_eq!(config.iterations(), 4);

        let config = SimulationConfig {
            time_step: 3.0,
            total_time: 10.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.iterations(), 4);

        let config = SimulationConfig {
            total_time: 0.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.iterations(), 1);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        for config in [
            SimulationConfig {
                time_step: 0.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                time_step: f64::NAN,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                total_time: -1.0,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                seconds_per_unit: f64::INFINITY,
                ..SimulationConfig::default()
            },
        ] {
            assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_validate_rejects_runaway_step_counts() {
        for config in [
            SimulationConfig {
                total_time: 1e30,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                time_step: 1e-300,
                ..SimulationConfig::default()
            },
            SimulationConfig {
                total_time: MAX_ITERATIONS as f64,
                ..SimulationConfig::default()
            },
        ] {
            assert!(matches!(config.validate(), Err(SimulationError::InvalidConfig(_))));
        }

        let at_limit = SimulationConfig {
            total_time: (MAX_ITERATIONS - 1) as f64,
            ..SimulationConfig::default()
        };
        assert!(at_limit.validate().is_ok());
        assert_eq!(at_limit.iterations(), MAX_ITERATIONS);
    }

    #[test]
    fn test_iterations_saturate_instead_of_overflowing() {
        let config = SimulationConfig {
            total_time: 1e30,
            ..SimulationConfig::default()
        };
        assert_eq!(config.iterations(), u64::MAX);
    }
}
