//! # Hive Simulator
//!
//! Concurrent position simulator for a worker bee and a drone bee.
//!
//! ## Features
//!
//! - Worker bee shuttling between its home point and the origin
//! - Drone bee random walk with periodic heading changes
//! - One thread per agent, console lines serialized by a shared guard
//! - Injectable pacing and seeding for fast, reproducible runs

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod agent;
pub mod config;
pub mod driver;
pub mod drone;
pub mod error;
pub mod heading;
pub mod pacing;
pub mod reporter;
pub mod worker;

pub use agent::Agent;
pub use config::SimulationConfig;
pub use driver::{RunSummary, SimulationDriver, UnitSummary};
pub use drone::DroneAgent;
pub use error::{Result, SimulationError};
pub use heading::RandomDirectionSource;
pub use pacing::{NoDelay, Pacer, ThreadSleepPacer};
pub use reporter::OutputGuard;
pub use worker::WorkerAgent;
