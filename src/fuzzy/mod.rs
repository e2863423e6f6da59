//! Fuzzy inference for Autopark
//!
//! This module implements the Mamdani-style inference engine behind every
//! velocity-producing maneuver phase: piecewise-linear membership functions,
//! linguistic variables over sampled universes, weighted rules, and centroid
//! defuzzification. Models are validated and compiled once at construction
//! and are read-only afterwards; inference is a pure function of the
//! compiled rule base and the inputs.

pub mod membership;
pub mod model;
pub mod rule;
pub mod variable;
pub mod velocity;

pub use membership::MembershipFunction;
pub use model::FuzzyModel;
pub use rule::{Condition, Rule};
pub use variable::{LinguisticVariable, Universe};
pub use velocity::{VelocityModel, VelocityProfile};

/// Errors raised while building a fuzzy model.
///
/// All validation happens at construction time; `infer` never fails. A
/// malformed maneuver configuration is therefore caught before the control
/// loop starts.
#[derive(Debug, Clone, PartialEq)]
pub enum FuzzyError {
    /// Membership control points must be non-decreasing.
    NonMonotonic {
        /// Offending control points, in the order given.
        points: Vec<f64>,
    },
    /// A universe needs at least two samples and a positive span.
    EmptyUniverse {
        /// Name of the variable the universe belongs to.
        variable: String,
    },
    /// A label was defined twice on the same variable.
    DuplicateLabel {
        /// Variable the label was added to.
        variable: String,
        /// The repeated label.
        label: String,
    },
    /// A rule references a variable the model does not own.
    UndefinedVariable {
        /// The unknown variable name.
        variable: String,
    },
    /// A rule references a label its variable does not define.
    UndefinedLabel {
        /// Variable the label was looked up on.
        variable: String,
        /// The unknown label.
        label: String,
    },
    /// A model with no rules can never produce output.
    EmptyRuleSet,
}

impl std::fmt::Display for FuzzyError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FuzzyError::NonMonotonic { points } => {
                write!(f, "membership control points not non-decreasing: {:?}", points)
            }
            FuzzyError::EmptyUniverse { variable } => {
                write!(f, "universe of '{}' is empty or degenerate", variable)
            }
            FuzzyError::DuplicateLabel { variable, label } => {
                write!(f, "label '{}' defined twice on '{}'", label, variable)
            }
            FuzzyError::UndefinedVariable { variable } => {
                write!(f, "rule references undefined variable '{}'", variable)
            }
            FuzzyError::UndefinedLabel { variable, label } => {
                write!(f, "rule references undefined label '{}' on '{}'", label, variable)
            }
            FuzzyError::EmptyRuleSet => write!(f, "model has no rules"),
        }
    }
}

impl std::error::Error for FuzzyError {}
