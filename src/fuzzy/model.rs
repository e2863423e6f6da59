// fuzzy/model.rs

// The compiled fuzzy model: antecedents, one consequent, and a validated
// rule set. Construction fails fast on any undefined variable or label;
// inference is pure and never fails.

use log::warn;

use super::rule::Condition;
use super::{FuzzyError, LinguisticVariable, Rule};

/// A compiled Mamdani fuzzy model.
///
/// Built once, reused read-only across many inference calls. A single
/// instance must not be invoked concurrently from multiple threads without
/// external serialization — inference takes `&self`, but sharing across
/// maneuvers is up to the caller.
#[derive(Debug, Clone)]
pub struct FuzzyModel {
    antecedents: Vec<LinguisticVariable>,
    consequent: LinguisticVariable,
    rules: Vec<Rule>,
}

impl FuzzyModel {
    /// Compile a model, validating every rule against the variables.
    ///
    /// Fails if any rule references a variable the model does not own, a
    /// label its variable does not define, or if the rule set is empty.
    pub fn new(
        antecedents: Vec<LinguisticVariable>,
        consequent: LinguisticVariable,
        rules: Vec<Rule>,
    ) -> Result<Self, FuzzyError> {
        if rules.is_empty() {
            return Err(FuzzyError::EmptyRuleSet);
        }

        for rule in &rules {
            for (variable, label) in rule.condition.terms() {
                let antecedent = antecedents
                    .iter()
                    .find(|a| a.name() == variable)
                    .ok_or_else(|| FuzzyError::UndefinedVariable {
                        variable: variable.to_string(),
                    })?;
                if antecedent.term(label).is_none() {
                    return Err(FuzzyError::UndefinedLabel {
                        variable: variable.to_string(),
                        label: label.to_string(),
                    });
                }
            }
            if consequent.term(&rule.consequent).is_none() {
                return Err(FuzzyError::UndefinedLabel {
                    variable: consequent.name().to_string(),
                    label: rule.consequent.clone(),
                });
            }
        }

        Ok(FuzzyModel {
            antecedents,
            consequent,
            rules,
        })
    }

    /// The consequent variable the model defuzzifies over.
    pub fn consequent(&self) -> &LinguisticVariable {
        &self.consequent
    }

    /// Run one inference pass.
    ///
    /// `inputs` maps antecedent names to crisp values; each is clamped into
    /// its variable's universe before fuzzification. A rule term whose
    /// variable has no supplied input fires with degree 0. The result is the
    /// centroid of the aggregated consequent set and always lies within the
    /// consequent universe bounds.
    ///
    /// If no rule fires with nonzero strength the aggregated set has zero
    /// area and the centroid is undefined; the model then falls back to 0.0
    /// (clamped into the consequent universe) and logs a warning, since a
    /// silent fallback can mask a mistuned rule base.
    pub fn infer(&self, inputs: &[(&str, f64)]) -> f64 {
        let samples = self.consequent.universe().samples();
        let mut aggregated = vec![0.0f64; samples.len()];

        for rule in &self.rules {
            let strength = self.firing_strength(&rule.condition, inputs);
            if strength <= 0.0 {
                continue;
            }
            // clip the consequent set to the firing strength, aggregate max
            let term = self
                .consequent
                .term(&rule.consequent)
                .expect("labels validated at construction");
            for (agg, &x) in aggregated.iter_mut().zip(samples) {
                let clipped = term.degree(x).min(strength);
                if clipped > *agg {
                    *agg = clipped;
                }
            }
        }

        let area: f64 = aggregated.iter().sum();
        if area <= 0.0 {
            warn!(
                "no rule fired for consequent '{}'; falling back to 0",
                self.consequent.name()
            );
            return self.consequent.universe().clamp(0.0);
        }

        let moment: f64 = aggregated
            .iter()
            .zip(samples)
            .map(|(mu, &x)| mu * x)
            .sum();
        moment / area
    }

    fn firing_strength(&self, condition: &Condition, inputs: &[(&str, f64)]) -> f64 {
        match condition {
            Condition::Is { variable, label } => {
                match inputs.iter().find(|(name, _)| name == variable) {
                    Some((_, x)) => self
                        .antecedents
                        .iter()
                        .find(|a| a.name() == variable)
                        .map_or(0.0, |a| a.fuzzify(label, *x)),
                    // no input for this antecedent: the term contributes nothing
                    None => 0.0,
                }
            }
            Condition::And(lhs, rhs) => self
                .firing_strength(lhs, inputs)
                .min(self.firing_strength(rhs, inputs)),
            Condition::Or(lhs, rhs) => self
                .firing_strength(lhs, inputs)
                .max(self.firing_strength(rhs, inputs)),
        }
    }
}
