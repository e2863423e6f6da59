//! Proximity sensing for Autopark
//!
//! This module turns raw per-direction range samples into the bounded,
//! clamped `DistanceReading` record the rest of the engine works with.
//! A failed or absent sample always degrades to "far" (`MAX_RANGE`),
//! never to a false near-reading of zero.

mod selector;

pub use selector::DistanceSelector;

use std::fmt;

/// Maximum usable range of the proximity sensors, in distance units.
/// Every normalized reading is clamped into `[0, MAX_RANGE]`.
pub const MAX_RANGE: f64 = 6.0;

/// Compass-like sensing directions around the platform.
///
/// The naming follows the mounting convention: `NorthWest` looks forward-left,
/// `WestNorth` looks left-forward, and so on around the hull.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Forward-right sensor
    NorthEast,
    /// Forward-left sensor
    NorthWest,
    /// Right-forward sensor
    EastNorth,
    /// Right-rear sensor
    EastSouth,
    /// Rear-right sensor
    SouthEast,
    /// Rear-left sensor
    SouthWest,
    /// Left-forward sensor
    WestNorth,
    /// Left-rear sensor
    WestSouth,
}

impl Direction {
    /// All eight directions, in a fixed order.
    pub const ALL: [Direction; 8] = [
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::EastNorth,
        Direction::EastSouth,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::WestNorth,
        Direction::WestSouth,
    ];

    fn index(self) -> usize {
        match self {
            Direction::NorthEast => 0,
            Direction::NorthWest => 1,
            Direction::EastNorth => 2,
            Direction::EastSouth => 3,
            Direction::SouthEast => 4,
            Direction::SouthWest => 5,
            Direction::WestNorth => 6,
            Direction::WestSouth => 7,
        }
    }

    fn short_name(self) -> &'static str {
        match self {
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::EastNorth => "EN",
            Direction::EastSouth => "ES",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
            Direction::WestNorth => "WN",
            Direction::WestSouth => "WS",
        }
    }
}

/// Mounting height of a sensor. Each direction carries two rings of sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Primary ring, used by most maneuvers.
    Upper,
    /// Secondary ring, mounted lower on the hull.
    Lower,
}

impl Depth {
    fn index(self) -> usize {
        match self {
            Depth::Upper => 0,
            Depth::Lower => 1,
        }
    }
}

/// One physical sensor: a direction plus a mounting depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Channel {
    /// Sensing direction.
    pub direction: Direction,
    /// Mounting ring.
    pub depth: Depth,
}

impl Channel {
    /// Upper-ring channel for a direction.
    pub fn upper(direction: Direction) -> Self {
        Channel {
            direction,
            depth: Depth::Upper,
        }
    }

    /// Lower-ring channel for a direction.
    pub fn lower(direction: Direction) -> Self {
        Channel {
            direction,
            depth: Depth::Lower,
        }
    }

    fn index(self) -> (usize, usize) {
        (self.direction.index(), self.depth.index())
    }
}

/// One raw sensor sweep, as delivered by the transport layer.
///
/// `None` means the sensor produced no reading this tick (timeout or
/// nothing within range). Raw values are unclamped.
#[derive(Debug, Clone, Default)]
pub struct RawScan {
    samples: [[Option<f64>; 2]; 8],
}

impl RawScan {
    /// A scan with no readings at all.
    pub fn empty() -> Self {
        RawScan::default()
    }

    /// Record a raw sample for a channel.
    pub fn set(&mut self, channel: Channel, distance: f64) {
        let (d, r) = channel.index();
        self.samples[d][r] = Some(distance);
    }

    /// Raw sample for a channel, if the sensor reported one.
    pub fn get(&self, channel: Channel) -> Option<f64> {
        let (d, r) = channel.index();
        self.samples[d][r]
    }
}

/// Normalized per-direction distances for one control tick.
///
/// Immutable once constructed; the sequencer builds exactly one per tick and
/// every phase hook invoked during that tick sees the same reading.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceReading {
    values: [[f64; 2]; 8],
}

impl DistanceReading {
    /// Normalize a raw scan into a bounded reading.
    ///
    /// Absent, infinite, or non-numeric samples resolve to `MAX_RANGE` — an
    /// undetected obstacle is assumed not to be nearby. Finite samples are
    /// clamped into `[0, MAX_RANGE]`; in-range samples pass through unchanged.
    pub fn from_raw(scan: &RawScan) -> Self {
        let mut values = [[MAX_RANGE; 2]; 8];
        for direction in Direction::ALL {
            for depth in [Depth::Upper, Depth::Lower] {
                let raw = scan
                    .get(Channel { direction, depth })
                    .unwrap_or(f64::INFINITY);
                values[direction.index()][depth.index()] = normalize(raw);
            }
        }
        DistanceReading { values }
    }

    /// Build a reading directly from already-normalized values.
    ///
    /// Inputs are still clamped, so the invariants hold regardless of caller.
    pub fn from_values(values: [[f64; 2]; 8]) -> Self {
        let mut clamped = values;
        for ring in clamped.iter_mut() {
            for value in ring.iter_mut() {
                *value = normalize(*value);
            }
        }
        DistanceReading { values: clamped }
    }

    /// Normalized distance for a channel, in `[0, MAX_RANGE]`.
    pub fn at(&self, channel: Channel) -> f64 {
        let (d, r) = channel.index();
        self.values[d][r]
    }

    /// Upper-ring distance for a direction.
    pub fn upper(&self, direction: Direction) -> f64 {
        self.at(Channel::upper(direction))
    }

    /// Lower-ring distance for a direction.
    pub fn lower(&self, direction: Direction) -> f64 {
        self.at(Channel::lower(direction))
    }
}

impl fmt::Display for DistanceReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, direction) in Direction::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(
                f,
                "{}:{:.2}",
                direction.short_name(),
                self.upper(*direction)
            )?;
        }
        Ok(())
    }
}

/// Source of raw range sweeps, read once per control tick.
///
/// This is the sole boundary to the sensor transport; timeouts are reported
/// as `None` samples inside the scan, never as errors.
pub trait RangeSensor {
    /// Acquire the latest raw sweep.
    fn read(&mut self) -> RawScan;
}

fn normalize(raw: f64) -> f64 {
    if raw.is_nan() {
        return MAX_RANGE;
    }
    raw.clamp(0.0, MAX_RANGE)
}
