// control/sequencer.rs

// The maneuver sequencer: an ordered queue of phases driven by cooperative
// polling. Exactly one phase is active per tick; phases execute in the
// order supplied at assembly and are never skipped or re-queued.

use std::collections::VecDeque;

use log::{debug, info};

use crate::actuation::{ActuationError, ActuationSink, MotionCommand};
use crate::sensing::{DistanceReading, RangeSensor};

use super::phase::Phase;
use super::telemetry::TickSink;

/// Drives an ordered maneuver to completion, one phase at a time.
///
/// `tick()` is called repeatedly by an external driver until it returns
/// `Ok(true)`. The sequencer owns the sensor and actuation boundaries for
/// the duration of the maneuver; abandoning the loop mid-maneuver leaves
/// the platform moving unless the caller issues its own Stop.
pub struct Sequencer<S: RangeSensor, A: ActuationSink> {
    sensor: S,
    sink: A,
    phases: VecDeque<Box<dyn Phase>>,
    front_started: bool,
    telemetry: Option<Box<dyn TickSink>>,
}

impl<S: RangeSensor, A: ActuationSink> Sequencer<S, A> {
    /// Assemble a sequencer from an ordered phase list and its boundaries.
    pub fn new(sensor: S, sink: A, phases: Vec<Box<dyn Phase>>) -> Self {
        Sequencer {
            sensor,
            sink,
            phases: phases.into(),
            front_started: false,
            telemetry: None,
        }
    }

    /// Attach an optional per-tick observer.
    pub fn with_telemetry(mut self, telemetry: Box<dyn TickSink>) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Number of phases still queued, the active one included.
    pub fn remaining_phases(&self) -> usize {
        self.phases.len()
    }

    /// Run one control tick. Returns `Ok(true)` once the maneuver is
    /// complete; repeated calls after completion stay `Ok(true)` without
    /// touching the sensor.
    ///
    /// Per tick: read and normalize the sensors once, start the front phase
    /// if it has not run yet, run its `control`, forward the command to the
    /// actuation sink, and retire the phase if it reported done. When the
    /// last phase retires, one final `Stop` is issued as a safety measure.
    pub fn tick(&mut self) -> Result<bool, ActuationError> {
        if self.phases.is_empty() {
            return Ok(true);
        }

        let scan = self.sensor.read();
        let reading = DistanceReading::from_raw(&scan);
        debug!("tick reading: {}", reading);

        // front phase starts exactly once, with this tick's reading
        let phase = self.phases.front_mut().expect("queue checked non-empty");
        if !self.front_started {
            info!("starting phase '{}'", phase.name());
            phase.started(&reading);
            self.front_started = true;
        }

        let output = phase.control(&reading);
        let command = output.command.clamped();

        if let Some(telemetry) = self.telemetry.as_mut() {
            telemetry.record(&reading, &command);
        }
        self.sink.apply(command)?;

        if output.done {
            let finished = self.phases.pop_front().expect("queue checked non-empty");
            info!("phase '{}' finished", finished.name());
            self.front_started = false;
        }

        if self.phases.is_empty() {
            // maneuver complete: bring the platform to rest
            self.sink.apply(MotionCommand::Stop)?;
            info!("maneuver complete");
            return Ok(true);
        }
        Ok(false)
    }
}
