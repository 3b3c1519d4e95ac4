//! # Hive Simulator - Domain Model
//!
//! Value objects, agent kinds and domain errors shared by the simulator.
//! Everything here is plain data: motion rules live in `hive-simulator`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Home point the worker bee starts from and returns to.
pub const HOME_POINT: Point2D = Point2D { x: 100.0, y: 100.0 };

/// Origin, the worker bee's outbound destination and the drone's start point.
pub const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

// =============================================================================
// VALUE OBJECTS
// =============================================================================

/// Planar position in simulation units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self, DomainError> {
        if x.is_finite() && y.is_finite() {
            Ok(Self { x, y })
        } else {
            Err(DomainError::NonFiniteCoordinates { x, y })
        }
    }

    /// Euclidean distance to another point
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Whether both coordinates are within `tolerance` of `other`.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// =============================================================================
// ENUMS
// =============================================================================

/// The two simulated bee roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentKind {
    Worker,
    Drone,
}

impl AgentKind {
    /// Label used as the prefix of every position line.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Worker => "Worker Bee",
            Self::Drone => "Drone Bee",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Speeds must be finite and non-negative.
pub fn validate_speed(speed: f64) -> Result<f64, DomainError> {
    if speed.is_finite() && speed >= 0.0 {
        Ok(speed)
    } else {
        Err(DomainError::InvalidSpeed(speed))
    }
}

/// Heading-change intervals must be finite and strictly positive.
pub fn validate_interval(interval: f64) -> Result<f64, DomainError> {
    if interval.is_finite() && interval > 0.0 {
        Ok(interval)
    } else {
        Err(DomainError::InvalidInterval(interval))
    }
}

// =============================================================================
// ERRORS
// =============================================================================

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("Non-finite coordinates: x={x}, y={y}")]
    NonFiniteCoordinates { x: f64, y: f64 },

    #[error("Invalid speed: {0} (must be finite and >= 0)")]
    InvalidSpeed(f64),

    #[error("Invalid direction-change interval: {0} (must be finite and > 0)")]
    InvalidInterval(f64),
}
