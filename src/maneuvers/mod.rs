//! Maneuver assemblies for Autopark
//!
//! Each maneuver is an ordered list of phases plus the author-tuned numeric
//! parameters its fuzzy stages run on. The tunings are configuration data —
//! near-identical stages legitimately carry different knees and snap
//! epsilons — so every maneuver exposes a serde config struct whose
//! `Default` carries the shipped tuning.

pub mod parallel;
pub mod perpendicular;

pub use parallel::ParallelConfig;
pub use perpendicular::PerpendicularConfig;
