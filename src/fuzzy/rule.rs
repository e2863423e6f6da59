// fuzzy/rule.rs

// Rule conditions and rules. A condition is a boolean combination of labeled
// antecedent terms; AND maps to min, OR to max. Rules are independent of one
// another — aggregation in the model is commutative, so rule order never
// affects inference.

/// A boolean combination over labeled antecedent terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `variable is label`
    Is {
        /// Antecedent variable name.
        variable: String,
        /// Label on that variable.
        label: String,
    },
    /// Both conditions hold (min of degrees).
    And(Box<Condition>, Box<Condition>),
    /// Either condition holds (max of degrees).
    Or(Box<Condition>, Box<Condition>),
}

impl Condition {
    /// The atomic condition `variable is label`.
    pub fn is(variable: &str, label: &str) -> Self {
        Condition::Is {
            variable: variable.to_string(),
            label: label.to_string(),
        }
    }

    /// Conjunction with another condition.
    pub fn and(self, other: Condition) -> Self {
        Condition::And(Box::new(self), Box::new(other))
    }

    /// Disjunction with another condition.
    pub fn or(self, other: Condition) -> Self {
        Condition::Or(Box::new(self), Box::new(other))
    }

    /// Every `(variable, label)` pair referenced by this condition.
    pub(crate) fn terms(&self) -> Vec<(&str, &str)> {
        match self {
            Condition::Is { variable, label } => vec![(variable.as_str(), label.as_str())],
            Condition::And(lhs, rhs) | Condition::Or(lhs, rhs) => {
                let mut terms = lhs.terms();
                terms.extend(rhs.terms());
                terms
            }
        }
    }
}

/// One inference rule: a condition over antecedents and the consequent label
/// it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Antecedent condition.
    pub condition: Condition,
    /// Label on the consequent variable this rule clips.
    pub consequent: String,
}

impl Rule {
    /// Build a rule from a condition and a consequent label.
    pub fn new(condition: Condition, consequent: &str) -> Self {
        Rule {
            condition,
            consequent: consequent.to_string(),
        }
    }

    /// Shorthand for the common single-antecedent rule
    /// `variable is label => consequent`.
    pub fn simple(variable: &str, label: &str, consequent: &str) -> Self {
        Rule::new(Condition::is(variable, label), consequent)
    }
}
