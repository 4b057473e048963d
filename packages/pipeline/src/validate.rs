//! Scan of stored facts for an expected marker.
//!
//! A missing target is an observation about the data, so this module never
//! returns an error.

use serde::{Deserialize, Serialize};
use statute_memory::Fact;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationOutcome {
    /// At least one fact contains the target.
    Found,
    /// Facts were stored but none contains the target.
    TargetMissing,
    /// The store holds no facts at all.
    EmptyStore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub target: String,
    pub total: usize,
    /// Ids of the facts containing the target, in insertion order.
    pub matched: Vec<i64>,
    pub outcome: ValidationOutcome,
}

impl ValidationReport {
    pub fn is_success(&self) -> bool {
        self.outcome == ValidationOutcome::Found
    }
}

/// Check `facts` for a literal, case-sensitive `target` substring.
pub fn validate_facts(facts: &[Fact], target: &str) -> ValidationReport {
    let matched: Vec<i64> = facts
        .iter()
        .filter(|fact| fact.content.contains(target))
        .map(|fact| fact.id)
        .collect();

    let outcome = if facts.is_empty() {
        ValidationOutcome::EmptyStore
    } else if matched.is_empty() {
        ValidationOutcome::TargetMissing
    } else {
        ValidationOutcome::Found
    };

    ValidationReport {
        target: target.to_string(),
        total: facts.len(),
        matched,
        outcome,
    }
}
