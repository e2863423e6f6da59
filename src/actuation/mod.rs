//! Actuation boundary for Autopark
//!
//! The engine never talks to wheels directly. Phases emit abstract
//! [`MotionCommand`]s; the sequencer forwards them to an [`ActuationSink`]
//! owned by the embedding process (simulator bridge, serial driver, …).
//! The differential wheel mapping lives here too, for sinks that drive a
//! skid-steer platform.

use std::fmt;

/// Upper bound on any command magnitude the platform accepts.
pub const MAX_COMMAND_VELOCITY: f64 = 10.0;

/// Trailing/leading wheel ratio for arc turns on the skid-steer platform.
const ARC_TRAIL_RATIO: f64 = 0.3;

/// An abstract actuation request for one control tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionCommand {
    /// Symmetric drive: positive forward, negative backward.
    Drive(f64),
    /// Arc turn at the given leading-wheel velocity: positive leads with
    /// the left wheel, negative with the right.
    Rotate(f64),
    /// Differential turn on the spot: positive spins left, negative right.
    SpotTurn(f64),
    /// Full stop, safe to repeat every tick.
    Stop,
}

impl MotionCommand {
    /// Signed magnitude of the command (0 for `Stop`).
    pub fn magnitude(&self) -> f64 {
        match *self {
            MotionCommand::Drive(v) | MotionCommand::Rotate(v) | MotionCommand::SpotTurn(v) => v,
            MotionCommand::Stop => 0.0,
        }
    }

    /// The same command with its magnitude clamped to the platform bound.
    pub fn clamped(self) -> Self {
        let clamp = |v: f64| v.clamp(-MAX_COMMAND_VELOCITY, MAX_COMMAND_VELOCITY);
        match self {
            MotionCommand::Drive(v) => MotionCommand::Drive(clamp(v)),
            MotionCommand::Rotate(v) => MotionCommand::Rotate(clamp(v)),
            MotionCommand::SpotTurn(v) => MotionCommand::SpotTurn(clamp(v)),
            MotionCommand::Stop => MotionCommand::Stop,
        }
    }
}

impl fmt::Display for MotionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionCommand::Drive(v) => write!(f, "drive({:.2})", v),
            MotionCommand::Rotate(v) => write!(f, "rotate({:.2})", v),
            MotionCommand::SpotTurn(v) => write!(f, "spot_turn({:.2})", v),
            MotionCommand::Stop => write!(f, "stop"),
        }
    }
}

/// Per-wheel target velocities for a differential-drive platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSpeeds {
    /// Left wheel velocity.
    pub left: f64,
    /// Right wheel velocity.
    pub right: f64,
}

/// Map an abstract command onto differential wheel velocities, clamping
/// both wheels into `[-max_wheel_velocity, max_wheel_velocity]`.
pub fn wheel_speeds(command: MotionCommand, max_wheel_velocity: f64) -> WheelSpeeds {
    let (left, right) = match command {
        MotionCommand::Drive(v) => (v, v),
        MotionCommand::SpotTurn(v) => (-v, v),
        MotionCommand::Rotate(v) => {
            if v >= 0.0 {
                // left arc: the left wheel leads, the right trails
                (v, ARC_TRAIL_RATIO * v)
            } else {
                (-ARC_TRAIL_RATIO * v, -v)
            }
        }
        MotionCommand::Stop => (0.0, 0.0),
    };
    WheelSpeeds {
        left: left.clamp(-max_wheel_velocity, max_wheel_velocity),
        right: right.clamp(-max_wheel_velocity, max_wheel_velocity),
    }
}

/// Consumer of motion commands — the sole boundary to the wheel transport.
///
/// `apply` is invoked exactly once per sequencer tick and must tolerate
/// repeated identical commands, including repeated `Stop`.
pub trait ActuationSink {
    /// Apply one command to the platform.
    fn apply(&mut self, command: MotionCommand) -> Result<(), ActuationError>;
}

/// Failure while applying a command to the platform.
///
/// Treated as fatal by the sequencer: `tick()` propagates it to the
/// external driver, which should stop polling and issue a Stop through
/// whatever channel remains available.
#[derive(Debug, Clone, PartialEq)]
pub struct ActuationError {
    message: String,
}

impl ActuationError {
    /// Wrap a transport-level failure description.
    pub fn new(message: impl Into<String>) -> Self {
        ActuationError {
            message: message.into(),
        }
    }
}

impl fmt::Display for ActuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "actuation failure: {}", self.message)
    }
}

impl std::error::Error for ActuationError {}
