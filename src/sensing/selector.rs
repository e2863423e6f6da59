// sensing/selector.rs

// How a phase reduces a full DistanceReading to the single scalar its fuzzy
// model consumes. Each maneuver stage watches a different slice of the hull:
// a single sensor, the minimum over a corner, or the gap opening up behind
// an inverted rear sensor.

use super::{Channel, DistanceReading, MAX_RANGE};

/// Selects the scalar distance a phase feeds into its fuzzy model.
#[derive(Debug, Clone, PartialEq)]
pub enum DistanceSelector {
    /// One channel, as-is.
    Component(Channel),
    /// Minimum over a set of channels (closest obstacle wins).
    MinOf(Vec<Channel>),
    /// Maximum over a set of channels (widest opening wins).
    MaxOf(Vec<Channel>),
    /// Plain inversion: `MAX_RANGE - d`. A no-detection reading (already
    /// at `MAX_RANGE`) inverts to 0, so a lost echo reads as "nothing left
    /// to back toward" and a closed-loop stage watching it comes to rest.
    Inverted(Channel),
    /// Gap opening behind a sensor: `MAX_RANGE - d`, except a no-detection
    /// reading stays `MAX_RANGE`. A fully open side counts as a fully open
    /// gap, so a space-search stage keeps creeping past an empty stretch.
    Opening(Channel),
    /// Absolute difference between two channels, clamped to the range.
    /// Used for symmetry checks between opposed sensors.
    Difference(Channel, Channel),
}

impl DistanceSelector {
    /// Evaluate the selector against one tick's reading.
    ///
    /// The result is always within `[0, MAX_RANGE]`.
    pub fn select(&self, reading: &DistanceReading) -> f64 {
        match self {
            DistanceSelector::Component(channel) => reading.at(*channel),
            DistanceSelector::MinOf(channels) => channels
                .iter()
                .map(|c| reading.at(*c))
                .fold(MAX_RANGE, f64::min),
            DistanceSelector::MaxOf(channels) => {
                channels.iter().map(|c| reading.at(*c)).fold(0.0, f64::max)
            }
            DistanceSelector::Inverted(channel) => MAX_RANGE - reading.at(*channel),
            DistanceSelector::Opening(channel) => {
                let d = reading.at(*channel);
                if d >= MAX_RANGE {
                    MAX_RANGE
                } else {
                    MAX_RANGE - d
                }
            }
            DistanceSelector::Difference(a, b) => {
                (reading.at(*a) - reading.at(*b)).abs().min(MAX_RANGE)
            }
        }
    }
}
