//! Prioritized classification rules.
//!
//! Rules are evaluated top-down; the first whose predicate holds decides the
//! pattern. Each predicate reads only the boundary table and the input, and
//! treats unset or unrecognized values as matching nothing.

use super::boundaries::{listed, BoundaryTable};
use crate::domain::assessment::{AssessmentInput, Pattern};

/// Predicate over a boundary table and an input.
pub type RulePredicate = fn(&BoundaryTable, &AssessmentInput) -> bool;

/// One entry of the ordered decision list.
#[derive(Clone, Copy)]
pub struct Rule {
    pub pattern: Pattern,
    pub name: &'static str,
    pub predicate: RulePredicate,
}

impl Rule {
    pub fn matches(&self, table: &BoundaryTable, input: &AssessmentInput) -> bool {
        (self.predicate)(table, input)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("pattern", &self.pattern)
            .field("name", &self.name)
            .finish()
    }
}

/// The decision list, highest priority first. The last rule always matches.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            pattern: Pattern::Pain,
            name: "severe pain, or moderate pain with pain-type symptoms",
            predicate: is_pain,
        },
        Rule {
            pattern: Pattern::Heavy,
            name: "heavy flow, or long bleed with prolonged flow",
            predicate: is_heavy,
        },
        Rule {
            pattern: Pattern::Irregular,
            name: "cycle length irregular or outside 21-35 days",
            predicate: is_irregular,
        },
        Rule {
            pattern: Pattern::Developing,
            name: "adolescent with a non-typical signal",
            predicate: is_developing,
        },
        Rule {
            pattern: Pattern::Regular,
            name: "within typical ranges",
            predicate: always,
        },
    ]
}

pub fn is_pain(table: &BoundaryTable, input: &AssessmentInput) -> bool {
    let pain = input.pain_level.as_deref();
    if listed(&table.severe_pain_levels, pain) {
        return true;
    }
    listed(&table.moderate_pain_levels, pain)
        && input
            .physical_symptoms
            .iter()
            .any(|symptom| listed(&table.pain_symptoms, Some(symptom)))
}

pub fn is_heavy(table: &BoundaryTable, input: &AssessmentInput) -> bool {
    let flow = input.flow_heaviness.as_deref();
    listed(&table.heavy_flow_levels, flow)
        || (listed(&table.long_durations, input.period_duration.as_deref())
            && listed(&table.prolonged_flow_levels, flow))
}

pub fn is_irregular(table: &BoundaryTable, input: &AssessmentInput) -> bool {
    listed(&table.irregular_cycle_lengths, input.cycle_length.as_deref())
}

pub fn is_developing(table: &BoundaryTable, input: &AssessmentInput) -> bool {
    if !listed(&table.adolescent_ages, input.age.as_deref()) {
        return false;
    }
    let signals = &table.developing_signals;
    listed(&signals.cycle_lengths, input.cycle_length.as_deref())
        || listed(&signals.durations, input.period_duration.as_deref())
        || listed(&signals.pain_levels, input.pain_level.as_deref())
        || listed(&signals.flow_levels, input.flow_heaviness.as_deref())
}

fn always(_: &BoundaryTable, _: &AssessmentInput) -> bool {
    true
}
