// fuzzy/variable.rs

// Sampled universes of discourse and the linguistic variables defined over
// them. A variable maps labels ("low", "medium", "high") to membership
// functions; rules reference labels, never functions directly.

use std::collections::BTreeMap;

use super::{FuzzyError, MembershipFunction};

/// A discretized closed interval — the domain a linguistic variable and its
/// defuzzification are computed over.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    samples: Vec<f64>,
}

impl Universe {
    /// `n` evenly spaced samples over `[min, max]`, endpoints included.
    pub fn linspace(min: f64, max: f64, n: usize) -> Self {
        let mut samples = Vec::with_capacity(n);
        if n == 1 {
            samples.push(min);
        } else {
            let step = (max - min) / (n - 1) as f64;
            for i in 0..n {
                samples.push(min + step * i as f64);
            }
        }
        Universe { samples }
    }

    /// The sample points, in ascending order.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Lower bound of the universe.
    pub fn min(&self) -> f64 {
        self.samples.first().copied().unwrap_or(0.0)
    }

    /// Upper bound of the universe.
    pub fn max(&self) -> f64 {
        self.samples.last().copied().unwrap_or(0.0)
    }

    /// Clamp an input into the universe bounds.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.min();
        }
        x.clamp(self.min(), self.max())
    }

    fn is_degenerate(&self) -> bool {
        self.samples.len() < 2 || self.max() <= self.min()
    }
}

/// A named scalar domain plus its labeled membership functions.
///
/// Used both as antecedent (rule input) and consequent (inference output).
#[derive(Debug, Clone, PartialEq)]
pub struct LinguisticVariable {
    name: String,
    universe: Universe,
    terms: BTreeMap<String, MembershipFunction>,
}

impl LinguisticVariable {
    /// Create a variable over a universe. Fails if the universe is empty or
    /// has a non-positive span.
    pub fn new(name: &str, universe: Universe) -> Result<Self, FuzzyError> {
        if universe.is_degenerate() {
            return Err(FuzzyError::EmptyUniverse {
                variable: name.to_string(),
            });
        }
        Ok(LinguisticVariable {
            name: name.to_string(),
            universe,
            terms: BTreeMap::new(),
        })
    }

    /// Attach a labeled membership function. Fails on duplicate labels.
    pub fn add_term(
        &mut self,
        label: &str,
        function: MembershipFunction,
    ) -> Result<(), FuzzyError> {
        if self.terms.contains_key(label) {
            return Err(FuzzyError::DuplicateLabel {
                variable: self.name.clone(),
                label: label.to_string(),
            });
        }
        self.terms.insert(label.to_string(), function);
        Ok(())
    }

    /// Variable name, as referenced by rules and inference inputs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variable's sampled universe.
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Membership function for a label, if defined.
    pub fn term(&self, label: &str) -> Option<&MembershipFunction> {
        self.terms.get(label)
    }

    /// Degree of membership of `x` in a label's set. The input is clamped
    /// into the universe bounds first; an unknown label reads as 0.
    pub fn fuzzify(&self, label: &str, x: f64) -> f64 {
        let x = self.universe.clamp(x);
        self.terms.get(label).map_or(0.0, |mf| mf.degree(x))
    }
}
