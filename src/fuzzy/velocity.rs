// fuzzy/velocity.rs

// The distance-to-velocity model every velocity-producing phase shares:
// three fuzzy distance regions (low / medium / high) with knees at the stop
// and break distances, mapped onto three velocity regions. Below the stop
// distance the output is forced to zero before inference; after inference a
// magnitude below the snap epsilon is snapped to exactly zero, which is the
// signal a phase uses to report itself complete.

use serde::{Deserialize, Serialize};

use crate::sensing::MAX_RANGE;

use super::{FuzzyError, FuzzyModel, LinguisticVariable, MembershipFunction, Rule, Universe};

/// Samples per universe; matches the resolution the tunings were made at.
const UNIVERSE_SAMPLES: usize = 600;

/// Tuning parameters for one velocity model.
///
/// These are maneuver configuration data, not engine policy: near-identical
/// phases legitimately carry different knees and epsilons, each tuned for
/// its segment of the maneuver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VelocityProfile {
    /// Peak output magnitude, reached well beyond the break distance.
    pub max_velocity: f64,
    /// Output at the break-distance knee.
    pub break_velocity: f64,
    /// Distance below which the output is forced to zero.
    pub stop_distance: f64,
    /// Distance above which the output saturates toward `max_velocity`.
    pub break_distance: f64,
    /// Half-width of the fuzzy transition band between distance regions.
    pub sharpness: f64,
    /// Magnitude below which the defuzzified output snaps to exactly zero.
    pub snap_epsilon: f64,
}

/// A compiled velocity model for one maneuver phase.
#[derive(Debug, Clone)]
pub struct VelocityModel {
    profile: VelocityProfile,
    model: FuzzyModel,
}

impl VelocityModel {
    /// Compile the model for a profile.
    ///
    /// Fails if the profile produces non-monotonic membership regions, e.g.
    /// when the transition bands around the stop and break distances overlap
    /// (`break_distance - stop_distance < 2 * sharpness`).
    pub fn new(profile: VelocityProfile) -> Result<Self, FuzzyError> {
        let low_span = profile.break_velocity;
        let high_span = profile.max_velocity - profile.break_velocity;
        let s = profile.sharpness;

        let mut dist = LinguisticVariable::new(
            "dist",
            Universe::linspace(0.0, MAX_RANGE, UNIVERSE_SAMPLES),
        )?;
        dist.add_term(
            "low",
            MembershipFunction::trapezoid(
                0.0,
                0.0,
                profile.stop_distance - s,
                profile.stop_distance + s,
            )?,
        )?;
        dist.add_term(
            "medium",
            MembershipFunction::trapezoid(
                profile.stop_distance - s,
                profile.stop_distance + s,
                profile.break_distance - s,
                profile.break_distance + s,
            )?,
        )?;
        dist.add_term(
            "high",
            MembershipFunction::trapezoid(
                profile.break_distance - s,
                profile.break_distance + s,
                MAX_RANGE,
                MAX_RANGE,
            )?,
        )?;

        let mut vel = LinguisticVariable::new(
            "vel",
            Universe::linspace(
                -low_span,
                profile.max_velocity + high_span,
                UNIVERSE_SAMPLES,
            ),
        )?;
        vel.add_term(
            "low",
            MembershipFunction::triangle(-low_span, 0.0, low_span)?,
        )?;
        vel.add_term(
            "medium",
            MembershipFunction::triangle(0.0, profile.break_velocity, profile.max_velocity)?,
        )?;
        vel.add_term(
            "high",
            MembershipFunction::triangle(
                profile.max_velocity - high_span,
                profile.max_velocity,
                profile.max_velocity + high_span,
            )?,
        )?;

        let rules = vec![
            Rule::simple("dist", "low", "low"),
            Rule::simple("dist", "medium", "medium"),
            Rule::simple("dist", "high", "high"),
        ];

        let model = FuzzyModel::new(vec![dist], vel, rules)?;
        Ok(VelocityModel { profile, model })
    }

    /// The profile this model was compiled from.
    pub fn profile(&self) -> &VelocityProfile {
        &self.profile
    }

    /// Defuzzified velocity before the snap threshold is applied.
    ///
    /// Distances below the stop distance short-circuit to 0 without running
    /// inference.
    pub fn raw_velocity(&self, distance: f64) -> f64 {
        if distance < self.profile.stop_distance {
            return 0.0;
        }
        self.model.infer(&[("dist", distance)])
    }

    /// Velocity for a distance, with the snap-to-zero threshold applied.
    ///
    /// Returns exactly 0.0 when the raw magnitude falls below
    /// `snap_epsilon`; a phase treats that as "stage complete".
    pub fn velocity(&self, distance: f64) -> f64 {
        let raw = self.raw_velocity(distance);
        if raw.abs() < self.profile.snap_epsilon {
            0.0
        } else {
            raw
        }
    }
}
