//! Autopark - Staged Fuzzy-Control Parking Engine
//!
//! This library drives an autonomous wheeled platform through multi-phase
//! parking maneuvers. Each maneuver is an ordered queue of discrete control
//! phases; the closed-loop phases use a Mamdani fuzzy-inference model to
//! turn normalized proximity readings into a continuous velocity command,
//! and report completion when that velocity decays to zero.

#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod actuation;
pub mod control;
pub mod fuzzy;
pub mod maneuvers;
pub mod sensing;

// Re-export commonly used items for easier access
pub use actuation::{ActuationError, ActuationSink, MotionCommand};
pub use control::{Phase, PhaseOutput, Sequencer};
pub use fuzzy::{FuzzyError, FuzzyModel, VelocityModel, VelocityProfile};
pub use maneuvers::{ParallelConfig, PerpendicularConfig};
pub use sensing::{DistanceReading, RangeSensor, RawScan, MAX_RANGE};

use serde::{Deserialize, Serialize};

/// Top-level configuration for the parking engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParkConfig {
    /// Perpendicular maneuver tunings.
    pub perpendicular: PerpendicularConfig,
    /// Parallel maneuver tunings.
    pub parallel: ParallelConfig,
    /// Actuation platform limits.
    pub actuation: ActuationConfig,
}

/// Actuation platform limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActuationConfig {
    /// Per-wheel velocity bound for the differential mapping.
    pub max_wheel_velocity: f64,
}

impl Default for ParkConfig {
    fn default() -> Self {
        ParkConfig {
            perpendicular: PerpendicularConfig::default(),
            parallel: ParallelConfig::default(),
            actuation: ActuationConfig {
                max_wheel_velocity: actuation::MAX_COMMAND_VELOCITY,
            },
        }
    }
}

impl ParkConfig {
    /// Load a configuration from a YAML file.
    pub fn load(path: &str) -> Result<Self, ParkError> {
        let file = std::fs::File::open(path)
            .map_err(|e| ParkError::Config(format!("cannot open '{}': {}", path, e)))?;
        serde_yaml::from_reader(file)
            .map_err(|e| ParkError::Config(format!("cannot parse '{}': {}", path, e)))
    }
}

/// Top-level error type for the parking engine.
#[derive(Debug)]
pub enum ParkError {
    /// Fuzzy model construction failure (malformed tuning).
    Fuzzy(FuzzyError),
    /// Actuation sink failure (fatal; stop the poll loop).
    Actuation(ActuationError),
    /// Configuration loading or parsing failure.
    Config(String),
}

impl std::fmt::Display for ParkError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParkError::Fuzzy(e) => write!(f, "fuzzy model error: {}", e),
            ParkError::Actuation(e) => write!(f, "{}", e),
            ParkError::Config(msg) => write!(f, "configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ParkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParkError::Fuzzy(e) => Some(e),
            ParkError::Actuation(e) => Some(e),
            ParkError::Config(_) => None,
        }
    }
}

impl From<FuzzyError> for ParkError {
    fn from(e: FuzzyError) -> Self {
        ParkError::Fuzzy(e)
    }
}

impl From<ActuationError> for ParkError {
    fn from(e: ActuationError) -> Self {
        ParkError::Actuation(e)
    }
}
