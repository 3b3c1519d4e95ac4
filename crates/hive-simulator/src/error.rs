//! Simulator error types.

use hive_domain::{AgentKind, DomainError};
use thiserror::Error;

/// Simulation errors.
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Rejected configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Agent parameter rejected by the domain layer
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Writing a position line failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// An execution unit panicked before finishing its loop
    #[error("{0} execution unit panicked")]
    UnitPanicked(AgentKind),
}

/// Result type for simulator operations.
pub type Result<T> = std::result::Result<T, SimulationError>;
