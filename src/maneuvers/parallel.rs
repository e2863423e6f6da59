// maneuvers/parallel.rs

// Parallel parking: creep forward along the row watching the gap opening up
// behind the rear-right lower sensor, then two timed opposing spot turns to
// swing the tail into the space. The sequencer's final Stop brings the
// platform to rest.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::actuation::MotionCommand;
use crate::control::{Clock, DriveKind, FuzzyVelocityAction, MonotonicClock, Phase, TimedAction};
use crate::fuzzy::{FuzzyError, VelocityModel, VelocityProfile};
use crate::sensing::{Channel, Direction, DistanceSelector};

/// Tunings for the parallel parking maneuver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallelConfig {
    /// Forward creep along the row, watching the gap behind rear-right.
    pub find_space: VelocityProfile,
    /// Spot-turn magnitude for the two swing phases.
    pub swing_velocity: f64,
    /// Duration of each swing phase, in seconds.
    pub swing_seconds: f64,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        ParallelConfig {
            find_space: VelocityProfile {
                max_velocity: 10.0,
                break_velocity: 3.0,
                stop_distance: 3.451,
                break_distance: 4.0,
                sharpness: 0.2,
                snap_epsilon: 0.05,
            },
            swing_velocity: 4.0,
            swing_seconds: 4.0,
        }
    }
}

impl ParallelConfig {
    /// Assemble the ordered phase list for this tuning.
    pub fn assemble(&self) -> Result<Vec<Box<dyn Phase>>, FuzzyError> {
        self.assemble_with_clock(Arc::new(MonotonicClock))
    }

    /// Assemble against a caller-supplied clock (for simulated time).
    pub fn assemble_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Result<Vec<Box<dyn Phase>>, FuzzyError> {
        let find_space = Arc::new(VelocityModel::new(self.find_space)?);
        let swing = Duration::from_secs_f64(self.swing_seconds);

        Ok(vec![
            Box::new(FuzzyVelocityAction::new(
                "forward_to_find_space",
                DistanceSelector::Opening(Channel::lower(Direction::SouthEast)),
                DriveKind::Forward,
                find_space,
            )),
            Box::new(TimedAction::with_clock(
                "swing_in",
                MotionCommand::SpotTurn(-self.swing_velocity),
                swing,
                clock.clone(),
            )),
            Box::new(TimedAction::with_clock(
                "counter_swing",
                MotionCommand::SpotTurn(self.swing_velocity),
                swing,
                clock,
            )),
        ])
    }
}
