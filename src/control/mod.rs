//! Maneuver control for Autopark
//!
//! This module holds the discrete-event half of the engine: the polymorphic
//! maneuver [`Phase`] and its built-in variants, the [`Sequencer`] that
//! advances an ordered phase queue one tick at a time, and the optional
//! per-tick telemetry sink.

pub mod phase;
pub mod sequencer;
pub mod telemetry;

pub use phase::{
    Clock, ConditionAction, DriveKind, FuzzyVelocityAction, MonotonicClock, Phase, PhaseOutput,
    StopCondition, TimedAction, WaitAction,
};
pub use sequencer::Sequencer;
pub use telemetry::{History, TickSink};
