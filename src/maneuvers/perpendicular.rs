// maneuvers/perpendicular.rs

// Perpendicular parking: settle the sensors, creep forward along the row
// until the left-hand gap opens, back up to the turn point, swing left into
// the bay until the nose clears, then pull forward until the side sensors
// open up.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::control::{
    Clock, ConditionAction, DriveKind, FuzzyVelocityAction, MonotonicClock, Phase, StopCondition,
    WaitAction,
};
use crate::fuzzy::{FuzzyError, VelocityModel, VelocityProfile};
use crate::sensing::{Channel, Direction, DistanceSelector};

/// Tunings for the perpendicular parking maneuver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerpendicularConfig {
    /// Sensor stabilization wait before anything moves, in seconds.
    pub settle_seconds: f64,
    /// Forward creep along the row, watching the forward-left sensor.
    pub find_space: VelocityProfile,
    /// Reverse to the turn point, watching the inverted forward-right
    /// distance; a lost echo inverts to 0 and ends the stage at rest.
    pub backward_before_turn: VelocityProfile,
    /// Left swing into the bay, watching the closest of the nose sensors.
    pub turn_to_park: VelocityProfile,
    /// Fixed forward velocity for the final straightening run.
    pub finish_velocity: f64,
    /// Side clearance at which the final run stops.
    pub finish_clearance: f64,
}

impl Default for PerpendicularConfig {
    fn default() -> Self {
        PerpendicularConfig {
            settle_seconds: 0.1,
            find_space: VelocityProfile {
                max_velocity: 10.0,
                break_velocity: 5.0,
                stop_distance: 1.50,
                break_distance: 2.0,
                sharpness: 0.2,
                snap_epsilon: 0.05,
            },
            backward_before_turn: VelocityProfile {
                max_velocity: 4.0,
                break_velocity: 2.0,
                stop_distance: 4.23,
                break_distance: 4.6,
                sharpness: 0.1,
                snap_epsilon: 0.05,
            },
            turn_to_park: VelocityProfile {
                max_velocity: 5.0,
                break_velocity: 2.0,
                stop_distance: 1.55,
                break_distance: 1.8,
                sharpness: 0.1,
                snap_epsilon: 0.05,
            },
            finish_velocity: 4.0,
            finish_clearance: 3.0,
        }
    }
}

impl PerpendicularConfig {
    /// Assemble the ordered phase list for this tuning.
    pub fn assemble(&self) -> Result<Vec<Box<dyn Phase>>, FuzzyError> {
        self.assemble_with_clock(Arc::new(MonotonicClock))
    }

    /// Assemble against a caller-supplied clock (for simulated time).
    ///
    /// Each fuzzy stage's model is compiled here, once, and handed into the
    /// phase by shared reference.
    pub fn assemble_with_clock(
        &self,
        clock: Arc<dyn Clock>,
    ) -> Result<Vec<Box<dyn Phase>>, FuzzyError> {
        let find_space = Arc::new(VelocityModel::new(self.find_space)?);
        let backward = Arc::new(VelocityModel::new(self.backward_before_turn)?);
        let turn = Arc::new(VelocityModel::new(self.turn_to_park)?);

        let nose = vec![
            Channel::upper(Direction::NorthEast),
            Channel::upper(Direction::NorthWest),
            Channel::upper(Direction::WestNorth),
        ];
        let sides = vec![
            Channel::upper(Direction::WestNorth),
            Channel::upper(Direction::EastNorth),
        ];

        Ok(vec![
            Box::new(WaitAction::with_clock(
                Duration::from_secs_f64(self.settle_seconds),
                clock,
            )),
            Box::new(FuzzyVelocityAction::new(
                "forward_to_find_space",
                DistanceSelector::Component(Channel::upper(Direction::NorthWest)),
                DriveKind::Forward,
                find_space,
            )),
            Box::new(FuzzyVelocityAction::new(
                "backward_before_turn",
                DistanceSelector::Inverted(Channel::upper(Direction::NorthEast)),
                DriveKind::Backward,
                backward,
            )),
            Box::new(FuzzyVelocityAction::new(
                "turn_left_to_park",
                DistanceSelector::MinOf(nose),
                DriveKind::TurnLeft,
                turn,
            )),
            Box::new(ConditionAction::new(
                "forward_to_finish",
                crate::actuation::MotionCommand::Drive(self.finish_velocity),
                StopCondition::Above {
                    selector: DistanceSelector::MaxOf(sides),
                    threshold: self.finish_clearance,
                },
            )),
        ])
    }
}
