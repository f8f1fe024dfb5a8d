//! Expert Aggregator - combines individual priority vectors into a group view.

use crate::domain::foundation::ExpertId;

use super::comparison_matrix::geometric_mean;
use super::{AnalysisError, PriorityVector};

/// One expert's priorities for an element set.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpertPriorities {
    pub expert_id: ExpertId,
    pub vector: PriorityVector,
    pub consistency_ratio: f64,
}

/// Group priorities for an element set.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPriorities {
    pub vector: PriorityVector,
    pub consistency_ratio: f64,
    pub expert_count: usize,
}

impl GroupPriorities {
    /// Priorities for a set that needs no judgments.
    pub fn trivial(vector: PriorityVector) -> Self {
        Self {
            vector,
            consistency_ratio: 0.0,
            expert_count: 0,
        }
    }
}

pub struct ExpertAggregator;

impl ExpertAggregator {
    /// Aggregates expert priorities.
    ///
    /// Weights are the per-element geometric mean across experts,
    /// renormalized to sum 1. The group consistency ratio is the arithmetic
    /// mean of the expert ratios.
    ///
    /// # Errors
    ///
    /// - `NoData` for an empty input
    /// - `ModelInconsistency` if the experts' vectors cover different elements
    ///   or list them in a different order
    pub fn aggregate(experts: &[ExpertPriorities]) -> Result<GroupPriorities, AnalysisError> {
        let first = experts.first().ok_or(AnalysisError::NoData)?;
        let element_ids = first.vector.element_ids();

        if let Some(other) = experts
            .iter()
            .find(|e| e.vector.element_ids() != element_ids)
        {
            return Err(AnalysisError::model_inconsistency(format!(
                "priority vector of expert {} does not match the element set",
                other.expert_id
            )));
        }

        let raw: Vec<f64> = (0..element_ids.len())
            .map(|i| {
                let column: Vec<f64> = experts.iter().map(|e| e.vector.weights()[i]).collect();
                geometric_mean(&column)
            })
            .collect();

        let vector = PriorityVector::normalized(element_ids.to_vec(), raw)?;
        let consistency_ratio =
            experts.iter().map(|e| e.consistency_ratio).sum::<f64>() / experts.len() as f64;

        Ok(GroupPriorities {
            vector,
            consistency_ratio,
            expert_count: experts.len(),
        })
    }
}
