//! Ordered first-match-wins rule lists.
//!
//! Danger levels and profile types are both assigned by walking an ordered
//! list of predicates. Rule regions overlap, so evaluation order is part of
//! the contract: the first rule whose predicate holds decides the outcome and
//! later rules are never consulted.

use super::axes::RiderAxes;

/// Unrounded numbers the rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssessmentSignals {
    pub risk: f64,
    pub skill: f64,
    pub adequacy: f64,
    pub safety_index: f64,
}

impl AssessmentSignals {
    pub fn new(risk: f64, skill: f64, adequacy: f64) -> Self {
        Self {
            risk,
            skill,
            adequacy,
            safety_index: skill - risk - adequacy.abs(),
        }
    }

    pub fn from_axes(axes: &RiderAxes) -> Self {
        Self::new(
            axes.risk_taking.value(),
            axes.technical_skills.value(),
            axes.adequacy.value(),
        )
    }
}

/// A named predicate paired with the outcome it selects.
#[derive(Clone, Copy)]
pub struct Rule<T> {
    pub name: &'static str,
    pub outcome: T,
    pub applies: fn(&AssessmentSignals) -> bool,
}

/// Returns the outcome of the first matching rule, or `fallback`.
pub fn first_match<T: Copy>(rules: &[Rule<T>], signals: &AssessmentSignals, fallback: T) -> T {
    matching_rule(rules, signals)
        .map(|rule| rule.outcome)
        .unwrap_or(fallback)
}

/// Returns the first matching rule itself.
pub fn matching_rule<'a, T>(rules: &'a [Rule<T>], signals: &AssessmentSignals) -> Option<&'a Rule<T>> {
    rules.iter().find(|rule| (rule.applies)(signals))
}
