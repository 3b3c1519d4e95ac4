//! Simulation driver running one execution unit per agent.

use crate::agent::Agent;
use crate::config::SimulationConfig;
use crate::drone::DroneAgent;
use crate::error::{Result, SimulationError};
use crate::heading::{RandomDirectionSource, system_time_seed};
use crate::pacing::{Pacer, ThreadSleepPacer};
use crate::reporter::OutputGuard;
use crate::worker::WorkerAgent;
use hive_domain::{AgentKind, Point2D};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::thread;
use tracing::{debug, info};

/// Outcome of one execution unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub kind: AgentKind,
    pub lines_written: u64,
    pub final_position: Point2D,
}

/// Outcome of a full run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub worker: UnitSummary,
    pub drone: UnitSummary,
}

impl RunSummary {
    #[must_use]
    pub const fn total_lines(&self) -> u64 {
        self.worker.lines_written + self.drone.lines_written
    }
}

/// Drives the worker and drone bees concurrently over the configured duration.
pub struct SimulationDriver<P = ThreadSleepPacer> {
    config: SimulationConfig,
    pacer: P,
}

impl SimulationDriver<ThreadSleepPacer> {
    /// Driver pacing each step with a real sleep, as configured.
    pub fn with_real_time(config: SimulationConfig) -> Result<Self> {
        let pacer = ThreadSleepPacer::new(config.seconds_per_unit);
        Self::new(config, pacer)
    }
}

impl<P: Pacer> SimulationDriver<P> {
    pub fn new(config: SimulationConfig, pacer: P) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, pacer })
    }

    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Build both agents from the configuration, seeding the drone's
    /// heading source once.
    pub fn build_agents(&self) -> Result<(WorkerAgent, DroneAgent)> {
        let seed = self.config.seed.unwrap_or_else(system_time_seed);
        debug!(seed, "Seeding drone heading source");

        let worker = WorkerAgent::new(self.config.worker_speed)?;
        let drone = DroneAgent::new(
            self.config.drone_speed,
            self.config.change_interval,
            RandomDirectionSource::seeded(seed),
        )?;
        Ok((worker, drone))
    }

    /// Build the agents and run both loops to completion.
    pub fn run<W: Write + Send>(&self, guard: &OutputGuard<W>) -> Result<RunSummary> {
        let (worker, drone) = self.build_agents()?;
        self.run_agents(worker, drone, guard)
    }

    /// Run two agents on their own threads and wait for both.
    pub fn run_agents<A, B, W>(
        &self,
        worker: A,
        drone: B,
        guard: &OutputGuard<W>,
    ) -> Result<RunSummary>
    where
        A: Agent,
        B: Agent,
        W: Write + Send,
    {
        let iterations = self.config.iterations();
        info!(
            iterations,
            time_step = self.config.time_step,
            total_time = self.config.total_time,
            "Starting simulation"
        );

        let worker_kind = worker.kind();
        let drone_kind = drone.kind();

        let (worker, drone) = thread::scope(|s| {
            let worker_unit = s.spawn(|| self.run_unit(worker, guard));
            let drone_unit = s.spawn(|| self.run_unit(drone, guard));

            let worker = worker_unit
                .join()
                .map_err(|_| SimulationError::UnitPanicked(worker_kind));
            let drone = drone_unit
                .join()
                .map_err(|_| SimulationError::UnitPanicked(drone_kind));
            (worker, drone)
        });

        let summary = RunSummary {
            worker: worker??,
            drone: drone??,
        };
        info!(total_lines = summary.total_lines(), "Simulation complete");
        Ok(summary)
    }

    /// One execution unit: update, report, pause, for every step.
    fn run_unit<A: Agent, W: Write>(
        &self,
        mut agent: A,
        guard: &OutputGuard<W>,
    ) -> Result<UnitSummary> {
        let kind = agent.kind();
        let iterations = self.config.iterations();
        let dt = self.config.time_step;
        info!(agent = %kind, "Execution unit started");

        let mut lines_written = 0;
        for step in 0..iterations {
            let t = self.config.time_at(step);
            agent.update(t, dt);
            agent.report(guard)?;
            lines_written += 1;
            self.pacer.pause(dt);
        }

        let final_position = agent.position();
        info!(agent = %kind, position = %final_position, "Execution unit finished");

        Ok(UnitSummary {
            kind,
            lines_written,
            final_position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pacing::NoDelay;
    use hive_domain::HOME_POINT;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn fast_config() -> SimulationConfig {
        SimulationConfig {
            seed: Some(1234),
            seconds_per_unit: 0.0,
            ..SimulationConfig::default()
        }
    }

    /// Sink that accepts `limit` lines, then fails every write.
    struct FailingSink {
        lines: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if self.lines.iter().filter(|&&b| b == b'\n').count() >= self.limit {
                return Err(std::io::Error::other("sink closed"));
            }
            self.lines.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        pauses: AtomicU64,
    }

    impl Pacer for CountingPacer {
        fn pause(&self, _dt: f64) {
            self.pauses.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_default_run_writes_21_lines_per_agent() {
        let driver = SimulationDriver::new(fast_config(), NoDelay).unwrap();
        let guard = OutputGuard::new(Vec::new());
        let summary = driver.run(&guard).unwrap();

        assert_eq!(summary.worker.lines_written, 21);
        assert_eq!(summary.drone.lines_written, 21);
        assert_eq!(summary.total_lines(), 42);

        let out = String::from_utf8(guard.into_inner()).unwrap();
        let worker_lines = out.lines().filter(|l| l.starts_with("Worker Bee Position: (")).count();
        let drone_lines = out.lines().filter(|l| l.starts_with("Drone Bee Position: (")).count();
        assert_eq!(worker_lines, 21);
        assert_eq!(drone_lines, 21);
        assert_eq!(out.lines().count(), 42);
    }

    #[test]
    fn test_worker_final_position_after_21_steps() {
        let driver = SimulationDriver::new(fast_config(), NoDelay).unwrap();
        let guard = OutputGuard::new(std::io::sink());
        let summary = driver.run(&guard).unwrap();

        let travelled = 21.0 / std::f64::consts::SQRT_2;
        let expected = HOME_POINT.x - travelled;
        assert!((summary.worker.final_position.x - expected).abs() < 1e-9);
        assert!((summary.worker.final_position.y - expected).abs() < 1e-9);
    }

    #[test]
    fn test_pacer_called_once_per_step() {
        let driver = SimulationDriver::new(fast_config(), CountingPacer::default()).unwrap();
        let guard = OutputGuard::new(std::io::sink());
        driver.run(&guard).unwrap();
        assert_eq!(driver.pacer.pauses.load(Ordering::Relaxed), 42);
    }

    #[test]
    fn test_same_seed_reproduces_drone_path() {
        let run = || {
            let driver = SimulationDriver::new(fast_config(), NoDelay).unwrap();
            driver.run(&OutputGuard::new(std::io::sink())).unwrap().drone.final_position
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig {
            time_step: -1.0,
            ..fast_config()
        };
        assert!(matches!(
            SimulationDriver::new(config, NoDelay),
            Err(SimulationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_invalid_agent_parameters_surface_as_domain_error() {
        let config = SimulationConfig {
            change_interval: 0.0,
            ..fast_config()
        };
        let driver = SimulationDriver::new(config, NoDelay).unwrap();
        assert!(matches!(driver.build_agents(), Err(SimulationError::Domain(_))));
    }

    #[test]
    fn test_lines_written_counts_reported_lines() {
        let config = SimulationConfig {
            total_time: 6.0,
            ..fast_config()
        };
        let driver = SimulationDriver::new(config, NoDelay).unwrap();
        let guard = OutputGuard::new(Vec::new());
        let summary = driver.run(&guard).unwrap();

        let out = String::from_utf8(guard.into_inner()).unwrap();
        let count = |prefix: &str| out.lines().filter(|l| l.starts_with(prefix)).count() as u64;
        assert_eq!(summary.worker.lines_written, count("Worker Bee"));
        assert_eq!(summary.drone.lines_written, count("Drone Bee"));
        assert_eq!(summary.total_lines(), 14);
    }

    #[test]
    fn test_failed_write_stops_run_with_io_error() {
        let driver = SimulationDriver::new(fast_config(), NoDelay).unwrap();
        let guard = OutputGuard::new(FailingSink {
            lines: Vec::new(),
            limit: 5,
        });

        let result = driver.run(&guard);
        assert!(matches!(result, Err(SimulationError::Io(_))));

        let sink = guard.into_inner();
        assert_eq!(sink.lines.iter().filter(|&&b| b == b'\n').count(), 5);
    }
}
