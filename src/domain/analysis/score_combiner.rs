//! Score Combiner - overall alternative scores from the criteria hierarchy.

use std::collections::BTreeMap;

use crate::domain::foundation::ElementId;

use super::{AnalysisError, PriorityVector};

pub struct ScoreCombiner;

impl ScoreCombiner {
    /// Combines criteria weights with per-criterion alternative weights.
    ///
    /// `score_a = Σ_c w_c · w_{c,a}`, renormalized to sum 1. Alternatives keep
    /// the order of the first criterion's vector.
    ///
    /// # Errors
    ///
    /// `ModelInconsistency` when the criteria of the two inputs differ or
    /// when the alternative sets differ between criteria.
    pub fn combine(
        criteria: &PriorityVector,
        alternatives: &BTreeMap<ElementId, PriorityVector>,
    ) -> Result<PriorityVector, AnalysisError> {
        if criteria.len() != alternatives.len()
            || criteria
                .element_ids()
                .iter()
                .any(|c| !alternatives.contains_key(c))
        {
            return Err(AnalysisError::model_inconsistency(
                "criteria weights and alternative weights cover different criteria",
            ));
        }

        let first = criteria
            .element_ids()
            .first()
            .and_then(|c| alternatives.get(c))
            .ok_or_else(|| AnalysisError::model_inconsistency("no criteria to combine"))?;
        let alternative_ids = first.element_ids().to_vec();

        let mut totals = vec![0.0; alternative_ids.len()];
        for (criterion, criterion_weight) in criteria.iter() {
            let local = &alternatives[criterion];
            if local.len() != alternative_ids.len() {
                return Err(mismatched_alternatives(criterion));
            }
            for (total, alternative) in totals.iter_mut().zip(&alternative_ids) {
                let weight = local
                    .get(alternative)
                    .ok_or_else(|| mismatched_alternatives(criterion))?;
                *total += criterion_weight * weight;
            }
        }

        PriorityVector::normalized(alternative_ids, totals)
    }
}

fn mismatched_alternatives(criterion: &ElementId) -> AnalysisError {
    AnalysisError::model_inconsistency(format!(
        "alternatives under criterion {} differ from the other criteria",
        criterion
    ))
}
