//! Results of a ranking calculation over a whole model.

use std::collections::BTreeMap;

use crate::domain::foundation::{ElementId, ExpertId};
use crate::domain::model::ElementSet;

use super::{AnalysisError, GroupPriorities, PriorityVector, RankedEntry};

/// Why an element set produced no priorities.
#[derive(Debug, Clone, PartialEq)]
pub struct SetFailure {
    pub error: AnalysisError,
    /// Expert whose judgments could not be completed, if one is to blame.
    pub expert_id: Option<ExpertId>,
}

impl SetFailure {
    pub fn new(error: AnalysisError) -> Self {
        Self {
            error,
            expert_id: None,
        }
    }

    pub fn for_expert(error: AnalysisError, expert_id: ExpertId) -> Self {
        Self {
            error,
            expert_id: Some(expert_id),
        }
    }

    /// Human readable description naming the expert when known.
    pub fn detail(&self) -> String {
        match self.expert_id {
            Some(expert) => format!("{} (expert {})", self.error, expert),
            None => self.error.to_string(),
        }
    }
}

/// Outcome for one element set.
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    Computed(GroupPriorities),
    Failed(SetFailure),
}

impl SetOutcome {
    pub fn priorities(&self) -> Option<&GroupPriorities> {
        match self {
            SetOutcome::Computed(group) => Some(group),
            SetOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&SetFailure> {
        match self {
            SetOutcome::Computed(_) => None,
            SetOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, SetOutcome::Computed(_))
    }
}

/// Ranked views of the computed weights, scores as percentages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rankings {
    pub overall: Option<Vec<RankedEntry>>,
    pub criteria: Option<Vec<RankedEntry>>,
    pub alternatives: BTreeMap<ElementId, Vec<RankedEntry>>,
}

/// Everything derived from a model's judgments.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResults {
    pub criteria: SetOutcome,
    /// One outcome per criterion, in model order.
    pub alternatives: Vec<(ElementId, SetOutcome)>,
    /// Present only when every element set was computed.
    pub overall_scores: Option<PriorityVector>,
    pub rankings: Rankings,
}

impl ModelResults {
    /// Outcome of the alternatives set under one criterion.
    pub fn alternatives_for(&self, criterion: &ElementId) -> Option<&SetOutcome> {
        self.alternatives
            .iter()
            .find(|(id, _)| id == criterion)
            .map(|(_, outcome)| outcome)
    }

    /// Failed sets keyed by slot: `"criteria"` or the criterion id.
    pub fn failures(&self) -> BTreeMap<String, &SetFailure> {
        let mut failures = BTreeMap::new();
        if let Some(failure) = self.criteria.failure() {
            failures.insert(ElementSet::Criteria.slot_key(), failure);
        }
        for (criterion, outcome) in &self.alternatives {
            if let Some(failure) = outcome.failure() {
                let set = ElementSet::Alternatives {
                    criterion: *criterion,
                };
                failures.insert(set.slot_key(), failure);
            }
        }
        failures
    }
}
