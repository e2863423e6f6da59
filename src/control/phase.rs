// control/phase.rs

// The polymorphic maneuver phase: given the current distance reading,
// compute one actuation command and report whether the phase is complete.
// Four behavioral variants cover every stage the parking maneuvers use:
// timed fixed commands, fuzzy-velocity stages, stabilization waits, and
// stages terminated by a geometric condition.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;

use crate::actuation::MotionCommand;
use crate::fuzzy::VelocityModel;
use crate::sensing::{DistanceReading, DistanceSelector};

/// Time source behind every duration-based phase.
///
/// Phases record their activation timestamp through this seam, so tests can
/// drive simulated time instead of waiting on the wall clock.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}

/// The default clock: `Instant::now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Result of one `control` call: the command to actuate this tick and
/// whether the phase has finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseOutput {
    /// Command to forward to the actuation sink.
    pub command: MotionCommand,
    /// True exactly when the phase is complete and must be retired.
    pub done: bool,
}

impl PhaseOutput {
    fn running(command: MotionCommand) -> Self {
        PhaseOutput {
            command,
            done: false,
        }
    }

    fn finished(command: MotionCommand) -> Self {
        PhaseOutput {
            command,
            done: true,
        }
    }
}

/// One unit of maneuver behavior.
///
/// Lifecycle: `started` is invoked exactly once, on the tick the phase
/// becomes the front of the sequencer's queue and before its first
/// `control` call; `control` runs once per tick while active; a phase that
/// reported `done` is retired and never reactivated.
pub trait Phase {
    /// Human-readable phase name, used for logging.
    fn name(&self) -> &str;

    /// Activation hook, called once with the same reading the first
    /// `control` call will see.
    fn started(&mut self, _reading: &DistanceReading) {}

    /// Compute this tick's command and completion flag.
    fn control(&mut self, reading: &DistanceReading) -> PhaseOutput;
}

/// Emits `Stop` every tick until a fixed duration has elapsed.
///
/// Used at the front of a maneuver to let the sensor streams stabilize
/// before anything moves.
pub struct WaitAction {
    name: String,
    duration: Duration,
    started_at: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl WaitAction {
    /// Wait for `duration` against the wall clock.
    pub fn new(duration: Duration) -> Self {
        Self::with_clock(duration, Arc::new(MonotonicClock))
    }

    /// Wait for `duration` against a caller-supplied clock.
    pub fn with_clock(duration: Duration, clock: Arc<dyn Clock>) -> Self {
        WaitAction {
            name: format!("wait({:.2}s)", duration.as_secs_f64()),
            duration,
            started_at: None,
            clock,
        }
    }
}

impl Phase for WaitAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn started(&mut self, _reading: &DistanceReading) {
        self.started_at = Some(self.clock.now());
    }

    fn control(&mut self, _reading: &DistanceReading) -> PhaseOutput {
        let elapsed = self
            .started_at
            .map(|start| self.clock.now().duration_since(start))
            .unwrap_or(Duration::ZERO);
        if elapsed > self.duration {
            PhaseOutput::finished(MotionCommand::Stop)
        } else {
            PhaseOutput::running(MotionCommand::Stop)
        }
    }
}

/// Emits a fixed command every tick until a configured duration has elapsed.
pub struct TimedAction {
    name: String,
    command: MotionCommand,
    duration: Duration,
    started_at: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl TimedAction {
    /// Run `command` for `duration` against the wall clock.
    pub fn new(name: &str, command: MotionCommand, duration: Duration) -> Self {
        Self::with_clock(name, command, duration, Arc::new(MonotonicClock))
    }

    /// Run `command` for `duration` against a caller-supplied clock.
    pub fn with_clock(
        name: &str,
        command: MotionCommand,
        duration: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        TimedAction {
            name: name.to_string(),
            command,
            duration,
            started_at: None,
            clock,
        }
    }
}

impl Phase for TimedAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn started(&mut self, _reading: &DistanceReading) {
        self.started_at = Some(self.clock.now());
    }

    fn control(&mut self, _reading: &DistanceReading) -> PhaseOutput {
        let elapsed = self
            .started_at
            .map(|start| self.clock.now().duration_since(start))
            .unwrap_or(Duration::ZERO);
        if elapsed > self.duration {
            PhaseOutput::finished(self.command)
        } else {
            PhaseOutput::running(self.command)
        }
    }
}

/// How a fuzzy-velocity phase maps its velocity magnitude onto a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveKind {
    /// Symmetric forward drive.
    Forward,
    /// Symmetric backward drive.
    Backward,
    /// Spot turn to the left.
    TurnLeft,
    /// Spot turn to the right.
    TurnRight,
}

impl DriveKind {
    fn command(self, velocity: f64) -> MotionCommand {
        match self {
            DriveKind::Forward => MotionCommand::Drive(velocity),
            DriveKind::Backward => MotionCommand::Drive(-velocity),
            DriveKind::TurnLeft => MotionCommand::SpotTurn(velocity),
            DriveKind::TurnRight => MotionCommand::SpotTurn(-velocity),
        }
    }
}

/// Closed-loop stage: feeds a selected distance into a shared velocity
/// model and drives until the computed velocity snaps to zero.
///
/// The model is compiled once at maneuver assembly and shared by reference;
/// this phase never mutates it.
pub struct FuzzyVelocityAction {
    name: String,
    selector: DistanceSelector,
    drive: DriveKind,
    model: Arc<VelocityModel>,
}

impl FuzzyVelocityAction {
    /// Build a fuzzy-velocity stage.
    pub fn new(
        name: &str,
        selector: DistanceSelector,
        drive: DriveKind,
        model: Arc<VelocityModel>,
    ) -> Self {
        FuzzyVelocityAction {
            name: name.to_string(),
            selector,
            drive,
            model,
        }
    }
}

impl Phase for FuzzyVelocityAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn control(&mut self, reading: &DistanceReading) -> PhaseOutput {
        let distance = self.selector.select(reading);
        let velocity = self.model.velocity(distance);
        debug!(
            "{}: distance={:.3} velocity={:.3}",
            self.name, distance, velocity
        );
        // a snapped-to-zero velocity is the completion signal
        if velocity == 0.0 {
            PhaseOutput::finished(MotionCommand::Stop)
        } else {
            PhaseOutput::running(self.drive.command(velocity))
        }
    }
}

/// Geometric termination test for a [`ConditionAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum StopCondition {
    /// Done once the selected distance drops below the threshold.
    Below {
        /// Distance selection to watch.
        selector: DistanceSelector,
        /// Threshold in distance units.
        threshold: f64,
    },
    /// Done once the selected distance rises above the threshold.
    Above {
        /// Distance selection to watch.
        selector: DistanceSelector,
        /// Threshold in distance units.
        threshold: f64,
    },
    /// Done once two selections agree to within a tolerance — a
    /// convergence/symmetry check for alignment turns.
    Converged {
        /// First distance selection.
        a: DistanceSelector,
        /// Second distance selection.
        b: DistanceSelector,
        /// Maximum allowed difference.
        tolerance: f64,
    },
}

impl StopCondition {
    fn holds(&self, reading: &DistanceReading) -> bool {
        match self {
            StopCondition::Below {
                selector,
                threshold,
            } => selector.select(reading) < *threshold,
            StopCondition::Above {
                selector,
                threshold,
            } => selector.select(reading) > *threshold,
            StopCondition::Converged { a, b, tolerance } => {
                (a.select(reading) - b.select(reading)).abs() <= *tolerance
            }
        }
    }
}

/// Open-loop stage terminated by a geometric condition instead of a fuzzy
/// zero-crossing: emits a fixed command until the condition holds.
pub struct ConditionAction {
    name: String,
    command: MotionCommand,
    condition: StopCondition,
}

impl ConditionAction {
    /// Run `command` until `condition` holds.
    pub fn new(name: &str, command: MotionCommand, condition: StopCondition) -> Self {
        ConditionAction {
            name: name.to_string(),
            command,
            condition,
        }
    }
}

impl Phase for ConditionAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn control(&mut self, reading: &DistanceReading) -> PhaseOutput {
        if self.condition.holds(reading) {
            PhaseOutput::finished(MotionCommand::Stop)
        } else {
            PhaseOutput::running(self.command)
        }
    }
}
