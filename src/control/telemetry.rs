// control/telemetry.rs

// Optional per-tick observation hook. The sequencer notifies the sink with
// the reading and the command of every tick; control logic never depends on
// it. A Vec-backed History implementation covers offline inspection of a
// finished maneuver.

use crate::actuation::MotionCommand;
use crate::sensing::DistanceReading;

/// Observer of the sequencer's per-tick activity.
pub trait TickSink {
    /// Called once per tick with the reading used and the command emitted.
    fn record(&mut self, reading: &DistanceReading, command: &MotionCommand);
}

/// In-memory tick history for diagnostics.
#[derive(Debug, Default)]
pub struct History {
    ticks: Vec<(DistanceReading, MotionCommand)>,
}

impl History {
    /// An empty history.
    pub fn new() -> Self {
        History::default()
    }

    /// All recorded ticks, oldest first.
    pub fn ticks(&self) -> &[(DistanceReading, MotionCommand)] {
        &self.ticks
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl TickSink for History {
    fn record(&mut self, reading: &DistanceReading, command: &MotionCommand) {
        self.ticks.push((reading.clone(), *command));
    }
}
