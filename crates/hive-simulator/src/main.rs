//! Hive Simulator CLI
//!
//! Runs the worker and drone bees side by side, printing positions to stdout.

use anyhow::Result;
use clap::Parser;
use hive_simulator::{OutputGuard, SimulationConfig, SimulationDriver};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hive-simulator")]
#[command(about = "Simulate a worker bee and a drone bee on separate threads")]
struct Args {
    /// Worker bee speed (units per time unit)
    #[arg(long, default_value = "1.0")]
    worker_speed: f64,

    /// Drone bee speed (units per time unit)
    #[arg(long, default_value = "1.0")]
    drone_speed: f64,

    /// Simulated time between drone heading changes
    #[arg(long, default_value = "5.0")]
    change_interval: f64,

    /// Simulated length of one step
    #[arg(long, default_value = "1.0")]
    time_step: f64,

    /// Total simulated time (inclusive)
    #[arg(long, default_value = "20.0")]
    total_time: f64,

    /// Wall-clock seconds per simulated time unit (0 disables pacing)
    #[arg(long, default_value = "1.0")]
    pace: f64,

    /// Seed for drone headings (defaults to the system time)
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        Self {
            worker_speed: args.worker_speed,
            drone_speed: args.drone_speed,
            change_interval: args.change_interval,
            time_step: args.time_step,
            total_time: args.total_time,
            seconds_per_unit: args.pace,
            seed: args.seed,
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only position lines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hive_simulator=info".parse()?),
        )
        .init();

    let config = SimulationConfig::from(Args::parse());
    info!(?config, "Starting hive simulation");

    let driver = SimulationDriver::with_real_time(config)?;
    let guard = OutputGuard::stdout();
    let summary = driver.run(&guard)?;

    info!(
        worker = %summary.worker.final_position,
        drone = %summary.drone.final_position,
        lines = summary.total_lines(),
        "Simulation finished"
    );

    Ok(())
}
