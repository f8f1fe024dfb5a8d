//! One expert's submitted judgments.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{ElementId, ExpertId, Timestamp};

use super::Judgment;

/// Judgments supplied by a single expert.
///
/// Criteria judgments and the per-criterion alternative judgments are
/// independent sets. Absent pairs are simply not listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertInput {
    pub expert_id: ExpertId,
    pub criteria_comparisons: Vec<Judgment>,
    pub alternatives_comparisons: BTreeMap<ElementId, Vec<Judgment>>,
    pub submitted_at: Timestamp,
}

impl ExpertInput {
    /// Creates an empty input for the given expert.
    pub fn new(expert_id: ExpertId) -> Self {
        Self {
            expert_id,
            criteria_comparisons: Vec::new(),
            alternatives_comparisons: BTreeMap::new(),
            submitted_at: Timestamp::now(),
        }
    }

    /// Sets the criteria judgments.
    pub fn with_criteria(mut self, judgments: Vec<Judgment>) -> Self {
        self.criteria_comparisons = judgments;
        self
    }

    /// Sets the alternative judgments under one criterion.
    pub fn with_alternatives(mut self, criterion: ElementId, judgments: Vec<Judgment>) -> Self {
        self.alternatives_comparisons.insert(criterion, judgments);
        self
    }

    /// Overrides the submission time (used when restoring stored input).
    pub fn submitted_at(mut self, at: Timestamp) -> Self {
        self.submitted_at = at;
        self
    }

    /// Alternative judgments for a criterion; empty if the expert gave none.
    pub fn alternatives_for(&self, criterion: &ElementId) -> &[Judgment] {
        self.alternatives_comparisons
            .get(criterion)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of judgments across all sets.
    pub fn judgment_count(&self) -> usize {
        self.criteria_comparisons.len()
            + self
                .alternatives_comparisons
                .values()
                .map(Vec::len)
                .sum::<usize>()
    }
}
